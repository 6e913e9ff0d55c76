//! The driver's finite-state machine.
//!
//! State is never stored directly; it is derived from whether a trace exists
//! and where the cursor sits, so it cannot drift out of sync with the data.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimState {
    /// No trace built yet (an evaluation result may or may not exist).
    Idle,
    /// Trace built, cursor at 0, nothing stepped.
    Ready,
    /// `0 < cursor < len`.
    Stepping,
    /// `cursor == len`.
    Complete,
}

impl SimState {
    /// State for a built trace of length `len` with the cursor at `cursor`.
    ///
    /// An empty trace is complete as soon as it is built.
    pub fn from_cursor(cursor: usize, len: usize) -> SimState {
        if cursor >= len {
            SimState::Complete
        } else if cursor == 0 {
            SimState::Ready
        } else {
            SimState::Stepping
        }
    }

    /// `true` in the states where `advance` has a step to commit.
    pub fn can_advance(self) -> bool {
        matches!(self, SimState::Ready | SimState::Stepping)
    }
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimState::Idle     => "Idle",
            SimState::Ready    => "Ready",
            SimState::Stepping => "Stepping",
            SimState::Complete => "Complete",
        };
        f.write_str(name)
    }
}
