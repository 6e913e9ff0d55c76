//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EvaluationRow, OutputResult, StepRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface here, but [`TraceOutputObserver`][crate::TraceOutputObserver]
/// stores them internally; retrieve them with `take_error`.
pub trait OutputWriter {
    /// Write one evaluation summary row.
    fn write_evaluation(&mut self, row: &EvaluationRow) -> OutputResult<()>;

    /// Write a batch of trace steps.
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
