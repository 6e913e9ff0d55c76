//! Evaluating many independent snapshots.
//!
//! Snapshots share no state, so the batch is embarrassingly parallel.  With
//! the `parallel` feature the work runs on Rayon; results always come back in
//! input order.

use bk_core::{BankerConfig, BkResult, Snapshot};
use tracing::debug;

use crate::{evaluate_snapshot, SafetyResult};

/// Safe/unsafe counts over a batch.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    pub total:   usize,
    pub safe:    usize,
    pub unsafe_: usize,
}

impl BatchSummary {
    /// Fraction of safe snapshots, `0.0` for an empty batch.
    pub fn safe_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.safe as f64 / self.total as f64
        }
    }
}

/// Evaluate every snapshot, preserving order.
pub fn evaluate_batch(snapshots: &[Snapshot]) -> Vec<SafetyResult> {
    #[cfg(not(feature = "parallel"))]
    {
        snapshots.iter().map(evaluate_snapshot).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        snapshots.par_iter().map(evaluate_snapshot).collect()
    }
}

/// Like [`evaluate_batch`] but honours `config.num_threads`.
///
/// Without the `parallel` feature the thread count is ignored.
pub fn evaluate_batch_with(
    snapshots: &[Snapshot],
    config:    &BankerConfig,
) -> BkResult<Vec<SafetyResult>> {
    config.validate()?;
    debug!(snapshots = snapshots.len(), threads = ?config.num_threads, "evaluating batch");

    #[cfg(not(feature = "parallel"))]
    {
        Ok(evaluate_batch(snapshots))
    }

    #[cfg(feature = "parallel")]
    {
        match config.num_threads {
            None => Ok(evaluate_batch(snapshots)),
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| bk_core::BkError::Config(format!("thread pool: {e}")))?;
                Ok(pool.install(|| evaluate_batch(snapshots)))
            }
        }
    }
}

/// Count safe and unsafe results.
pub fn summarize(results: &[SafetyResult]) -> BatchSummary {
    let safe = results.iter().filter(|r| r.safe).count();
    BatchSummary {
        total:   results.len(),
        safe,
        unsafe_: results.len() - safe,
    }
}
