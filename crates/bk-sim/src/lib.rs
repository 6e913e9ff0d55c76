//! `bk-sim`: stepwise replay of a safe completion sequence.
//!
//! # Lifecycle
//!
//! ```text
//!            start()            advance() ×(len-1)         advance()
//!   Idle ───────────▶ Ready ───────────────▶ Stepping ───────────▶ Complete
//!    ▲                  │                       │                     │
//!    └──────────────────┴─── any input edit ────┴─────────────────────┘
//! ```
//!
//! - [`replay`] / [`build_trace`] turn a sequence into an immutable [`Trace`]
//!   of [`StepDetail`]s (available before/after each hypothetical completion).
//! - [`Simulation`] owns the input snapshot, the evaluation result, the trace,
//!   and the cursor.  Editing the snapshot discards result and trace.
//! - [`SimObserver`] receives callbacks at each transition.
//!
//! # Quick-start
//!
//! ```rust
//! use bk_core::Snapshot;
//! use bk_sim::{SimState, Simulation};
//!
//! let snap = Snapshot::from_rows(
//!     vec![vec![1], vec![0], vec![0]],
//!     vec![vec![0], vec![2], vec![1]],
//!     vec![2],
//! ).unwrap();
//!
//! let mut sim = Simulation::new(snap);
//! sim.start().unwrap();
//! while sim.state() != SimState::Complete {
//!     let step = sim.advance().unwrap();
//!     assert!(step.can_execute);
//! }
//! ```

pub mod driver;
pub mod error;
pub mod observer;
pub mod state;
pub mod trace;


pub use driver::Simulation;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use state::SimState;
pub use trace::{build_trace, replay, StepDetail, Trace};
