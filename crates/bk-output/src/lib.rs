//! `bk-output`: writers for evaluation results and step traces.
//!
//! [`CsvWriter`] produces a report pair, `evaluations.csv` and
//! `trace_steps.csv`.  Writers implement [`OutputWriter`] and are driven by
//! [`TraceOutputObserver`], which implements `bk_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bk_output::{CsvWriter, TraceOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceOutputObserver::new(writer);
//! sim.run_to_end(&mut obs)?;
//! obs.finish();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceOutputObserver;
pub use row::{EvaluationRow, StepRow};
pub use writer::OutputWriter;
