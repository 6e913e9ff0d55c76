//! `Snapshot`: the three inputs of one safety evaluation.
//!
//! # Shape invariants
//!
//! ```text
//! allocation.process_count()  == need.process_count()  == P
//! allocation.resource_count() == need.resource_count() == available.len() == R
//! ```
//!
//! [`Snapshot::new`] is the only way to assemble one from parts, and it
//! enforces the invariants above, so downstream code (evaluator, trace
//! builder) indexes rows and columns without re-checking.  With the `serde`
//! feature, deserialization is routed through `Snapshot::new` as well.
//!
//! Edits are copy-on-write: `with_*` returns a new snapshot and leaves the
//! receiver untouched.

use crate::{BkError, BkResult, ProcessId, ResourceId, ResourceMatrix, ResourceVector};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSnapshot"))]
pub struct Snapshot {
    allocation: ResourceMatrix,
    need:       ResourceMatrix,
    available:  ResourceVector,
}

impl Snapshot {
    /// Validate shapes and assemble a snapshot.
    pub fn new(
        allocation: ResourceMatrix,
        need:       ResourceMatrix,
        available:  ResourceVector,
    ) -> BkResult<Self> {
        let resources = available.len();
        if need.process_count() != allocation.process_count() {
            return Err(BkError::DimensionMismatch {
                what:     "need matrix rows",
                expected: allocation.process_count(),
                got:      need.process_count(),
            });
        }
        if allocation.resource_count() != resources {
            return Err(BkError::DimensionMismatch {
                what:     "allocation matrix columns",
                expected: resources,
                got:      allocation.resource_count(),
            });
        }
        if need.resource_count() != resources {
            return Err(BkError::DimensionMismatch {
                what:     "need matrix columns",
                expected: resources,
                got:      need.resource_count(),
            });
        }
        Ok(Self { allocation, need, available })
    }

    /// Build from nested rows, e.g. straight from a grid widget or a test.
    ///
    /// ```
    /// use bk_core::Snapshot;
    ///
    /// let snap = Snapshot::from_rows(
    ///     vec![vec![1], vec![0], vec![0]],
    ///     vec![vec![0], vec![2], vec![1]],
    ///     vec![2],
    /// ).unwrap();
    /// assert_eq!(snap.process_count(), 3);
    /// assert_eq!(snap.resource_count(), 1);
    /// ```
    pub fn from_rows(
        allocation: Vec<Vec<u64>>,
        need:       Vec<Vec<u64>>,
        available:  Vec<u64>,
    ) -> BkResult<Self> {
        let resources = available.len();
        let allocation = ResourceMatrix::from_rows(
            "allocation row",
            allocation.into_iter().map(ResourceVector::from).collect(),
            resources,
        )?;
        let need = ResourceMatrix::from_rows(
            "need row",
            need.into_iter().map(ResourceVector::from).collect(),
            resources,
        )?;
        Self::new(allocation, need, ResourceVector::from(available))
    }

    /// Assemble without checking.  Callers guarantee the shape invariants.
    pub(crate) fn from_parts_unchecked(
        allocation: ResourceMatrix,
        need:       ResourceMatrix,
        available:  ResourceVector,
    ) -> Self {
        debug_assert_eq!(allocation.process_count(), need.process_count());
        debug_assert_eq!(allocation.resource_count(), available.len());
        debug_assert_eq!(need.resource_count(), available.len());
        Self { allocation, need, available }
    }

    /// All-zero snapshot of the given shape.
    pub fn zeroed(processes: usize, resources: usize) -> Self {
        Self {
            allocation: ResourceMatrix::zeroed(processes, resources),
            need:       ResourceMatrix::zeroed(processes, resources),
            available:  ResourceVector::zeroed(resources),
        }
    }

    /// Number of processes `P`.
    #[inline]
    pub fn process_count(&self) -> usize {
        self.allocation.process_count()
    }

    /// Number of resource types `R`.
    #[inline]
    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    pub fn allocation(&self) -> &ResourceMatrix {
        &self.allocation
    }

    pub fn need(&self) -> &ResourceMatrix {
        &self.need
    }

    pub fn available(&self) -> &ResourceVector {
        &self.available
    }

    /// Fail with `UnknownProcess` unless `process < P`.
    pub fn check_process(&self, process: ProcessId) -> BkResult<()> {
        if process.index() < self.process_count() {
            Ok(())
        } else {
            Err(BkError::UnknownProcess {
                process,
                process_count: self.process_count(),
            })
        }
    }

    /// Fail with `UnknownResource` unless `resource < R`.
    pub fn check_resource(&self, resource: ResourceId) -> BkResult<()> {
        if resource.index() < self.resource_count() {
            Ok(())
        } else {
            Err(BkError::UnknownResource {
                resource,
                resource_count: self.resource_count(),
            })
        }
    }

    // ── Copy-on-write editors ─────────────────────────────────────────────

    /// Copy of `self` with `allocation[process][resource] = units`.
    pub fn with_allocation(
        &self,
        process:  ProcessId,
        resource: ResourceId,
        units:    u64,
    ) -> BkResult<Self> {
        self.check_process(process)?;
        self.check_resource(resource)?;
        let mut next = self.clone();
        next.allocation.set(process, resource, units);
        Ok(next)
    }

    /// Copy of `self` with `need[process][resource] = units`.
    pub fn with_need(
        &self,
        process:  ProcessId,
        resource: ResourceId,
        units:    u64,
    ) -> BkResult<Self> {
        self.check_process(process)?;
        self.check_resource(resource)?;
        let mut next = self.clone();
        next.need.set(process, resource, units);
        Ok(next)
    }

    /// Copy of `self` with `available[resource] = units`.
    pub fn with_available(&self, resource: ResourceId, units: u64) -> BkResult<Self> {
        self.check_resource(resource)?;
        let mut next = self.clone();
        next.available.set(resource, units);
        Ok(next)
    }

    /// A zeroed snapshot of the new shape.
    ///
    /// Changing either count discards every entered value; the grids are
    /// rebuilt from scratch rather than truncated or padded.
    pub fn resized(&self, processes: usize, resources: usize) -> Self {
        Self::zeroed(processes, resources)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSnapshot {
    allocation: ResourceMatrix,
    need:       ResourceMatrix,
    available:  ResourceVector,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSnapshot> for Snapshot {
    type Error = BkError;

    fn try_from(raw: RawSnapshot) -> BkResult<Self> {
        Self::new(raw.allocation, raw.need, raw.available)
    }
}
