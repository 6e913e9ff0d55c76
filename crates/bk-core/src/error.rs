//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `BkError` as one variant
//! via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

use crate::{ProcessId, ResourceId};

/// The top-level error type for `bk-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BkError {
    /// Inputs disagree on the process count `P` or resource count `R`.
    #[error("{what} has length {got}, expected {expected}")]
    DimensionMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("process {process} out of range for {process_count} processes")]
    UnknownProcess {
        process:       ProcessId,
        process_count: usize,
    },

    #[error("resource {resource} out of range for {resource_count} resource types")]
    UnknownResource {
        resource:       ResourceId,
        resource_count: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `bk-*` crates.
pub type BkResult<T> = Result<T, BkError>;
