//! Observer trait for presentation layers and output writers.

use bk_safety::SafetyResult;

use crate::{StepDetail, Trace};

/// Callbacks invoked by [`Simulation`][crate::Simulation] at each transition.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SimObserver for StepPrinter {
///     fn on_step(&mut self, index: usize, step: &StepDetail) {
///         println!("{index}: {} {} -> {}", step.process, step.available_before, step.available_after);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every evaluation, safe or not.
    fn on_evaluated(&mut self, _result: &SafetyResult) {}

    /// Called when a trace has been (re)built and the cursor reset to 0.
    fn on_start(&mut self, _trace: &Trace) {}

    /// Called for each committed step.  `index` is the step's position in the
    /// trace.
    fn on_step(&mut self, _index: usize, _step: &StepDetail) {}

    /// Called once when the cursor reaches the end of the trace.
    fn on_complete(&mut self, _trace: &Trace) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
