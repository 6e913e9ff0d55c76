//! `bk-core`: foundational types for the banker deadlock-avoidance workspace.
//!
//! This crate is a dependency of every other `bk-*` crate.  It has no `bk-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`ids`]       | `ProcessId`, `ResourceId`                                 |
//! | [`vector`]    | `ResourceVector`: one unit count per resource type        |
//! | [`matrix`]    | `ResourceMatrix`: one `ResourceVector` row per process    |
//! | [`snapshot`]  | `Snapshot`: allocation + need + available, shape-checked  |
//! | [`config`]    | `BankerConfig`                                            |
//! | [`rng`]       | `SnapshotGenerator` (seeded random snapshots)             |
//! | [`loader`]    | `load_snapshot_csv`, `load_snapshot_reader`               |
//! | [`error`]     | `BkError`, `BkResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod loader;
pub mod matrix;
pub mod rng;
pub mod snapshot;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BankerConfig;
pub use error::{BkError, BkResult};
pub use ids::{ProcessId, ResourceId};
pub use loader::{load_snapshot_csv, load_snapshot_reader, MAX_PROCESSES, MAX_RESOURCES};
pub use matrix::ResourceMatrix;
pub use rng::SnapshotGenerator;
pub use snapshot::Snapshot;
pub use vector::ResourceVector;
