//! The safety evaluator.

use bk_core::{BkResult, ProcessId, ResourceMatrix, ResourceVector, Snapshot};
use tracing::{debug, trace};

/// Outcome of one safety evaluation.
///
/// When `safe` is `false`, `sequence` holds only the prefix of processes that
/// could complete before the scan got stuck.  It is kept for diagnostics and
/// must not be shown as a completion ordering; use [`witness`][Self::witness]
/// to get a sequence that is guaranteed complete.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyResult {
    pub safe:     bool,
    /// Process ids in the order they were judged completable.  Each id
    /// appears at most once.
    pub sequence: Vec<ProcessId>,
    /// Number of scan passes over the unfinished set.  Never exceeds
    /// `max(P, 1)`.
    pub passes:   usize,
}

impl SafetyResult {
    /// The full completion ordering, or `None` for an unsafe snapshot.
    pub fn witness(&self) -> Option<&[ProcessId]> {
        self.safe.then_some(self.sequence.as_slice())
    }

    /// Processes that never became runnable (empty when safe).
    pub fn stuck(&self, process_count: usize) -> Vec<ProcessId> {
        let mut done = vec![false; process_count];
        for p in &self.sequence {
            if let Some(slot) = done.get_mut(p.index()) {
                *slot = true;
            }
        }
        (0u32..)
            .zip(done)
            .filter(|&(_, d)| !d)
            .map(|(i, _)| ProcessId(i))
            .collect()
    }
}

/// Run the safety check on raw parts.
///
/// Shapes are validated first; inconsistent `P` or `R` fails with
/// [`BkError::DimensionMismatch`][bk_core::BkError::DimensionMismatch] before
/// any scanning happens.  The inputs are only read; a private copy of
/// `available` serves as the work vector.
pub fn evaluate(
    allocation: &ResourceMatrix,
    need:       &ResourceMatrix,
    available:  &ResourceVector,
) -> BkResult<SafetyResult> {
    let snapshot = Snapshot::new(allocation.clone(), need.clone(), available.clone())?;
    Ok(evaluate_snapshot(&snapshot))
}

/// Run the safety check on an already shape-checked snapshot.
pub fn evaluate_snapshot(snapshot: &Snapshot) -> SafetyResult {
    let process_count = snapshot.process_count();
    let allocation = snapshot.allocation().rows();
    let need = snapshot.need().rows();

    let mut work = snapshot.available().clone();
    let mut finish = vec![false; process_count];
    let mut sequence = Vec::with_capacity(process_count);
    let mut passes = 0usize;

    // Each productive pass finishes at least one process, so this runs at most
    // P times; the extra zero-progress pass only happens when someone is stuck.
    while sequence.len() < process_count {
        passes += 1;
        let mut progressed = false;

        for (i, process) in (0..process_count).zip((0u32..).map(ProcessId)) {
            if finish[i] || !work.covers(&need[i]) {
                continue;
            }
            work.add_assign(&allocation[i]);
            finish[i] = true;
            sequence.push(process);
            progressed = true;
            trace!(process = i, pass = passes, work = %work, "process runnable");
        }

        if !progressed {
            break;
        }
    }

    let safe = sequence.len() == process_count;
    debug!(
        processes = process_count,
        resources = snapshot.resource_count(),
        safe,
        passes,
        completed = sequence.len(),
        "safety evaluation finished"
    );

    SafetyResult { safe, sequence, passes }
}
