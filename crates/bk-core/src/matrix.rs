//! `ResourceMatrix`: one [`ResourceVector`] row per process.
//!
//! Used for both the allocation matrix (row `i` = units held by process `i`)
//! and the need matrix (row `i` = units process `i` may still request).
//! Rows are guaranteed to share one length; the resource count is stored
//! separately so a matrix with zero processes still knows its `R`.

use crate::{BkError, BkResult, ProcessId, ResourceId, ResourceVector};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct ResourceMatrix {
    rows:      Vec<ResourceVector>,
    resources: usize,
}

impl ResourceMatrix {
    /// A `processes × resources` matrix of zeros.
    pub fn zeroed(processes: usize, resources: usize) -> Self {
        Self {
            rows: vec![ResourceVector::zeroed(resources); processes],
            resources,
        }
    }

    /// Build from explicit rows, each of which must have length `resources`.
    ///
    /// Ragged input fails with [`BkError::DimensionMismatch`] naming the
    /// `what` matrix.
    pub fn from_rows(
        what:      &'static str,
        rows:      Vec<ResourceVector>,
        resources: usize,
    ) -> BkResult<Self> {
        if let Some(bad) = rows.iter().find(|row| row.len() != resources) {
            return Err(BkError::DimensionMismatch {
                what,
                expected: resources,
                got:      bad.len(),
            });
        }
        Ok(Self { rows, resources })
    }

    /// Number of rows `P`.
    #[inline]
    pub fn process_count(&self) -> usize {
        self.rows.len()
    }

    /// Row length `R`.
    #[inline]
    pub fn resource_count(&self) -> usize {
        self.resources
    }

    #[inline]
    pub fn row(&self, process: ProcessId) -> Option<&ResourceVector> {
        self.rows.get(process.index())
    }

    pub fn rows(&self) -> &[ResourceVector] {
        &self.rows
    }

    pub fn get(&self, process: ProcessId, resource: ResourceId) -> Option<u64> {
        self.row(process)?.get(resource)
    }

    /// Overwrite one cell.  Returns `false` if either index is out of range.
    pub fn set(&mut self, process: ProcessId, resource: ResourceId, units: u64) -> bool {
        match self.rows.get_mut(process.index()) {
            Some(row) => row.set(resource, units),
            None => false,
        }
    }
}

/// Unchecked wire form; deserialization goes through [`ResourceMatrix::from_rows`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    rows:      Vec<ResourceVector>,
    resources: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for ResourceMatrix {
    type Error = BkError;

    fn try_from(raw: RawMatrix) -> BkResult<Self> {
        Self::from_rows("matrix row", raw.rows, raw.resources)
    }
}
