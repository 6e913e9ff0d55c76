//! The `Simulation` cursor driver.

use bk_core::{ProcessId, ResourceId, Snapshot};
use bk_safety::{evaluate_snapshot, SafetyResult};
use tracing::debug;

use crate::{build_trace, NoopObserver, SimError, SimObserver, SimResult, SimState, StepDetail, Trace};

/// Owns one input snapshot and walks its safe sequence one step at a time.
///
/// | Method            | Valid in                 | Effect                              |
/// |-------------------|--------------------------|-------------------------------------|
/// | `evaluate`        | any                      | new result, drops any trace → Idle  |
/// | `start`           | any (needs safe result)  | builds trace, cursor 0              |
/// | `advance`         | Ready, Stepping          | commits `trace[cursor]`, cursor + 1 |
/// | `set_*`, `resize` | any                      | edits snapshot, drops all → Idle    |
///
/// `advance` outside its states returns [`SimError::InvalidState`] and leaves
/// the cursor where it was.
#[derive(Clone, Debug)]
pub struct Simulation {
    snapshot: Snapshot,
    result:   Option<SafetyResult>,
    trace:    Option<Trace>,
    /// Number of committed steps.  Only meaningful while `trace` is `Some`.
    cursor:   usize,
}

impl Simulation {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            result: None,
            trace:  None,
            cursor: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The latest evaluation, if one has run since the last edit.
    pub fn result(&self) -> Option<&SafetyResult> {
        self.result.as_ref()
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> SimState {
        match &self.trace {
            None        => SimState::Idle,
            Some(trace) => SimState::from_cursor(self.cursor, trace.len()),
        }
    }

    /// The step the next `advance` will commit.
    pub fn current_step(&self) -> Option<&StepDetail> {
        self.trace.as_ref()?.get(self.cursor)
    }

    /// Steps committed so far, in order.
    pub fn completed_steps(&self) -> &[StepDetail] {
        match &self.trace {
            None        => &[],
            Some(trace) => &trace.steps()[..self.cursor.min(trace.len())],
        }
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    pub fn evaluate(&mut self) -> &SafetyResult {
        self.evaluate_with(&mut NoopObserver)
    }

    /// Evaluate the current snapshot.  Any existing trace is discarded.
    pub fn evaluate_with<O: SimObserver>(&mut self, observer: &mut O) -> &SafetyResult {
        self.trace = None;
        self.cursor = 0;
        let result = evaluate_snapshot(&self.snapshot);
        observer.on_evaluated(&result);
        self.result.insert(result)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    pub fn start(&mut self) -> SimResult<SimState> {
        self.start_with(&mut NoopObserver)
    }

    /// Build the trace and put the cursor at 0.
    ///
    /// Evaluates first if no result is held.  Calling again rebuilds an
    /// identical trace and rewinds the cursor.  An unsafe snapshot fails with
    /// [`SimError::UnsafeSnapshot`] and leaves the driver `Idle`.
    pub fn start_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimState> {
        if self.result.is_none() {
            self.evaluate_with(observer);
        }
        self.trace = None;
        self.cursor = 0;

        let result = self.result.as_ref().ok_or(SimError::InvalidState {
            op:    "start",
            state: SimState::Idle,
        })?;
        let trace = build_trace(result, &self.snapshot)?;
        observer.on_start(&trace);

        let trace = self.trace.insert(trace);
        if trace.is_empty() {
            observer.on_complete(trace);
        }

        let state = self.state();
        debug!(steps = self.trace.as_ref().map_or(0, Trace::len), %state, "simulation started");
        Ok(state)
    }

    pub fn advance(&mut self) -> SimResult<&StepDetail> {
        self.advance_with(&mut NoopObserver)
    }

    /// Commit the step under the cursor and move past it.
    pub fn advance_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<&StepDetail> {
        let state = self.state();
        if !state.can_advance() {
            return Err(SimError::InvalidState { op: "advance", state });
        }

        let index = self.cursor;
        let trace = self
            .trace
            .as_ref()
            .ok_or(SimError::InvalidState { op: "advance", state })?;
        let step = trace
            .get(index)
            .ok_or(SimError::InvalidState { op: "advance", state })?;
        self.cursor = index + 1;

        observer.on_step(index, step);
        debug!(step = index, process = %step.process, "step committed");
        if self.cursor == trace.len() {
            observer.on_complete(trace);
            debug!(steps = trace.len(), "simulation complete");
        }
        Ok(step)
    }

    /// Start if needed, then advance until `Complete`.
    ///
    /// Returns the number of steps committed by this call.
    pub fn run_to_end<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        if self.state() == SimState::Idle {
            self.start_with(observer)?;
        }
        let mut committed = 0;
        while self.state().can_advance() {
            self.advance_with(observer)?;
            committed += 1;
        }
        Ok(committed)
    }

    // ── Input edits ───────────────────────────────────────────────────────
    //
    // Every edit replaces the snapshot with an edited copy and returns the
    // driver to Idle: a sequence computed from the old numbers means nothing
    // against the new ones.

    pub fn set_allocation(&mut self, process: ProcessId, resource: ResourceId, units: u64) -> SimResult<()> {
        let next = self.snapshot.with_allocation(process, resource, units)?;
        self.replace_snapshot(next);
        Ok(())
    }

    pub fn set_need(&mut self, process: ProcessId, resource: ResourceId, units: u64) -> SimResult<()> {
        let next = self.snapshot.with_need(process, resource, units)?;
        self.replace_snapshot(next);
        Ok(())
    }

    pub fn set_available(&mut self, resource: ResourceId, units: u64) -> SimResult<()> {
        let next = self.snapshot.with_available(resource, units)?;
        self.replace_snapshot(next);
        Ok(())
    }

    /// Change the process/resource counts.  All entered values are zeroed.
    pub fn resize(&mut self, processes: usize, resources: usize) {
        let next = self.snapshot.resized(processes, resources);
        self.replace_snapshot(next);
    }

    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.reset();
    }

    /// Drop result and trace, returning to `Idle`.  The snapshot is kept.
    pub fn reset(&mut self) {
        if self.result.is_some() || self.trace.is_some() {
            debug!(state = %self.state(), "simulation reset");
        }
        self.result = None;
        self.trace = None;
        self.cursor = 0;
    }
}
