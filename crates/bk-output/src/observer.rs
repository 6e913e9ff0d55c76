//! `TraceOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use bk_safety::SafetyResult;
use bk_sim::{SimObserver, StepDetail, Trace};
use tracing::warn;

use crate::row::{EvaluationRow, StepRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records every evaluation and every completed walk
/// through a trace.
///
/// Steps are buffered while the cursor moves and written in one batch when
/// the walk completes.  A restart (`on_start`) discards a partial walk, so
/// each written trace is whole.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Check with [`take_error`][Self::take_error].
pub struct TraceOutputObserver<W: OutputWriter> {
    writer:      W,
    /// Evaluations seen so far; the current one is `evaluations - 1`.
    evaluations: u32,
    pending:     Vec<StepRow>,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> TraceOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            evaluations: 0,
            pending:     Vec::new(),
            last_error:  None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Call once after the last walk.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn current_evaluation(&self) -> u32 {
        self.evaluations.saturating_sub(1)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceOutputObserver<W> {
    fn on_evaluated(&mut self, result: &SafetyResult) {
        let row = EvaluationRow::from_result(self.evaluations, result);
        self.evaluations += 1;
        self.pending.clear();
        let result = self.writer.write_evaluation(&row);
        self.store_err(result);
    }

    fn on_start(&mut self, _trace: &Trace) {
        self.pending.clear();
    }

    fn on_step(&mut self, index: usize, step: &StepDetail) {
        let row = StepRow::from_step(self.current_evaluation(), index, step);
        self.pending.push(row);
    }

    fn on_complete(&mut self, _trace: &Trace) {
        if self.pending.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.pending);
        let result = self.writer.write_steps(&rows);
        self.store_err(result);
    }
}
