use bk_core::BkError;
use thiserror::Error;

use crate::SimState;

#[derive(Debug, Error)]
pub enum SimError {
    /// A driver operation was called outside the states it is valid in.
    #[error("{op} is not valid in state {state}")]
    InvalidState {
        op:    &'static str,
        state: SimState,
    },

    /// A trace was requested for a snapshot whose evaluation was not safe.
    #[error("snapshot is unsafe: no complete sequence to replay")]
    UnsafeSnapshot,

    #[error(transparent)]
    Core(#[from] BkError),
}

pub type SimResult<T> = Result<T, SimError>;
