//! `bk-safety`: the Banker's Algorithm safety check.
//!
//! # Work/finish fixed point
//!
//! ```text
//! work   := copy(available)
//! finish := [false; P]
//! repeat until a pass finishes nobody (or everyone is finished):
//!   for i in 0..P with !finish[i]:
//!     if need[i] <= work (component-wise):
//!       work     += allocation[i]     // process completes, releases holdings
//!       finish[i] = true
//!       sequence.push(i)
//! safe := all(finish)
//! ```
//!
//! Scan order is ascending process index on every pass, so ties between
//! simultaneously runnable processes always resolve the same way.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`evaluator`]  | `evaluate`, `evaluate_snapshot`, `SafetyResult`       |
//! | [`batch`]      | `evaluate_batch[_with]`, `summarize`, `BatchSummary`  |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs `evaluate_batch` on Rayon's thread pool.          |
//! | `serde`    | Adds `Serialize`/`Deserialize` to result types.        |

pub mod batch;
pub mod evaluator;


pub use batch::{evaluate_batch, evaluate_batch_with, summarize, BatchSummary};
pub use evaluator::{evaluate, evaluate_snapshot, SafetyResult};
