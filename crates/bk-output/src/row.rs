//! Plain data row types written by output backends.

use bk_safety::SafetyResult;
use bk_sim::StepDetail;

/// One safety evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRow {
    /// Zero-based evaluation counter within one observer's lifetime.
    pub evaluation: u32,
    pub safe:       bool,
    /// Process indices; a partial prefix when `safe` is `false`.
    pub sequence:   Vec<u32>,
    pub passes:     u64,
}

impl EvaluationRow {
    pub fn from_result(evaluation: u32, result: &SafetyResult) -> Self {
        Self {
            evaluation,
            safe:     result.safe,
            sequence: result.sequence.iter().map(|p| p.0).collect(),
            passes:   result.passes as u64,
        }
    }
}

/// One committed trace step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    /// The evaluation whose sequence this step belongs to.
    pub evaluation:       u32,
    pub step:             u64,
    pub process:          u32,
    pub need:             Vec<u64>,
    pub can_execute:      bool,
    pub available_before: Vec<u64>,
    pub available_after:  Vec<u64>,
}

impl StepRow {
    pub fn from_step(evaluation: u32, index: usize, step: &StepDetail) -> Self {
        Self {
            evaluation,
            step:             index as u64,
            process:          step.process.0,
            need:             step.need.as_slice().to_vec(),
            can_execute:      step.can_execute,
            available_before: step.available_before.as_slice().to_vec(),
            available_after:  step.available_after.as_slice().to_vec(),
        }
    }
}

/// `[3, 3, 2]` → `"3 3 2"`.  Used for vector-valued columns.
pub fn join_units<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
