//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `evaluations.csv`
//! - `trace_steps.csv`
//!
//! Vector-valued columns hold space-separated unit counts (`"3 3 2"`).

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::join_units;
use crate::writer::OutputWriter;
use crate::{EvaluationRow, OutputResult, StepRow};

/// Writes evaluations and trace steps to two CSV files.
pub struct CsvWriter {
    evaluations: Writer<File>,
    steps:       Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut evaluations = Writer::from_path(dir.join("evaluations.csv"))?;
        evaluations.write_record(["evaluation", "safe", "sequence", "passes"])?;

        let mut steps = Writer::from_path(dir.join("trace_steps.csv"))?;
        steps.write_record([
            "evaluation",
            "step",
            "process",
            "need",
            "can_execute",
            "available_before",
            "available_after",
        ])?;

        Ok(Self {
            evaluations,
            steps,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_evaluation(&mut self, row: &EvaluationRow) -> OutputResult<()> {
        self.evaluations.write_record(&[
            row.evaluation.to_string(),
            (row.safe as u8).to_string(),
            join_units(&row.sequence),
            row.passes.to_string(),
        ])?;
        Ok(())
    }

    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
        for row in rows {
            self.steps.write_record(&[
                row.evaluation.to_string(),
                row.step.to_string(),
                row.process.to_string(),
                join_units(&row.need),
                (row.can_execute as u8).to_string(),
                join_units(&row.available_before),
                join_units(&row.available_after),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.evaluations.flush()?;
        self.steps.flush()?;
        Ok(())
    }
}
