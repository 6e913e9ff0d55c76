//! Building the step trace for a completion sequence.
//!
//! # Algorithm
//!
//! ```text
//! running := copy(available)
//! for p in sequence:
//!   before      := copy(running)
//!   can_execute := need[p] <= running
//!   after       := if can_execute { running + allocation[p] } else { before }
//!   running     := after
//!   emit StepDetail { p, need[p], can_execute, before, after }
//! ```
//!
//! For a sequence from a safe evaluation every step can execute.  A partial or
//! hand-made sequence degrades gracefully: a blocked step releases nothing and
//! the replay carries on from the unchanged availability.

use bk_core::{BkResult, ProcessId, ResourceVector, Snapshot};
use bk_safety::SafetyResult;
use tracing::{debug, warn};

use crate::{SimError, SimResult};

/// One process's hypothetical completion within a trace.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepDetail {
    pub process:          ProcessId,
    /// The process's need row at evaluation time.
    pub need:             ResourceVector,
    pub can_execute:      bool,
    pub available_before: ResourceVector,
    /// Equal to `available_before` when `can_execute` is `false`.
    pub available_after:  ResourceVector,
}

impl StepDetail {
    /// Units released by this step (`after - before`).
    pub fn released(&self) -> ResourceVector {
        self.available_after
            .as_slice()
            .iter()
            .zip(self.available_before.as_slice())
            .map(|(&after, &before)| after.saturating_sub(before))
            .collect::<Vec<u64>>()
            .into()
    }
}

/// An immutable, ordered list of [`StepDetail`]s.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    steps: Vec<StepDetail>,
}

impl Trace {
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepDetail] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&StepDetail> {
        self.steps.get(index)
    }

    /// `true` iff no step was blocked.
    pub fn all_executed(&self) -> bool {
        self.steps.iter().all(|s| s.can_execute)
    }

    /// Availability after the last step, or `None` for an empty trace.
    pub fn final_available(&self) -> Option<&ResourceVector> {
        self.steps.last().map(|s| &s.available_after)
    }
}

/// Replay `sequence` against `snapshot`, one step per entry.
///
/// Every entry must name an existing process
/// ([`BkError::UnknownProcess`][bk_core::BkError::UnknownProcess] otherwise).
/// Blocked steps are recorded with `can_execute == false` rather than
/// rejected.
pub fn replay(sequence: &[ProcessId], snapshot: &Snapshot) -> BkResult<Trace> {
    for &p in sequence {
        snapshot.check_process(p)?;
    }

    let mut running = snapshot.available().clone();
    let mut steps = Vec::with_capacity(sequence.len());

    for &process in sequence {
        // Rows exist: every id was range-checked above.
        let need = &snapshot.need().rows()[process.index()];
        let held = &snapshot.allocation().rows()[process.index()];

        let before = running.clone();
        let can_execute = running.covers(need);
        if can_execute {
            running.add_assign(held);
        } else {
            warn!(%process, need = %need, available = %running, "replay step cannot execute");
        }

        steps.push(StepDetail {
            process,
            need: need.clone(),
            can_execute,
            available_before: before,
            available_after: running.clone(),
        });
    }

    debug!(steps = steps.len(), "trace built");
    Ok(Trace { steps })
}

/// Build the trace for a safe evaluation of `snapshot`.
///
/// Fails with [`SimError::UnsafeSnapshot`] when `result` is not safe, so a
/// partial prefix is never replayed as if it were a full ordering.
pub fn build_trace(result: &SafetyResult, snapshot: &Snapshot) -> SimResult<Trace> {
    let sequence = result.witness().ok_or(SimError::UnsafeSnapshot)?;
    Ok(replay(sequence, snapshot)?)
}
