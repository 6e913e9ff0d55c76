//! Run configuration shared by batch evaluation and the demo binaries.

use crate::{BkError, BkResult};

/// Top-level configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (with the
/// `serde` feature) or built in code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BankerConfig {
    /// Master RNG seed.  The same seed always produces identical snapshots.
    pub seed: u64,

    /// Worker thread count passed to Rayon for batch evaluation.  `None` uses
    /// all logical cores.
    pub num_threads: Option<usize>,

    /// Inclusive upper bound on any generated unit count.
    pub max_units: u64,
}

impl Default for BankerConfig {
    fn default() -> Self {
        Self {
            seed:        42,
            num_threads: None,
            max_units:   10,
        }
    }
}

impl BankerConfig {
    /// Reject settings that can never produce a meaningful run.
    pub fn validate(&self) -> BkResult<()> {
        if self.max_units == 0 {
            return Err(BkError::Config("max_units must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(BkError::Config("num_threads must be at least 1 when set".into()));
        }
        Ok(())
    }
}
