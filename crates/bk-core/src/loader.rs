//! CSV snapshot loader.
//!
//! # CSV format
//!
//! One row per non-zero cell, in long form:
//!
//! ```csv
//! matrix,process,resource,units
//! allocation,0,0,1
//! need,1,0,2
//! need,2,0,1
//! available,,0,2
//! ```
//!
//! | `matrix`     | `process`  | Meaning                               |
//! |--------------|------------|---------------------------------------|
//! | `allocation` | required   | units currently held by the process   |
//! | `need`       | required   | units the process may still request   |
//! | `available`  | empty      | free units of the resource            |
//!
//! The shape is inferred from the largest indices seen: `P = max(process)+1`,
//! `R = max(resource)+1`.  Cells that are never listed are zero, matching a
//! freshly created input grid.  Listing the same cell twice is an error, as
//! is a process index at or above [`MAX_PROCESSES`] or a resource index at
//! or above [`MAX_RESOURCES`].

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{BkError, BkResult, ProcessId, ResourceId, ResourceMatrix, ResourceVector, Snapshot};

/// Exclusive upper bound on `process` indices accepted by the loader.
pub const MAX_PROCESSES: usize = 4096;

/// Exclusive upper bound on `resource` indices accepted by the loader.
pub const MAX_RESOURCES: usize = 1024;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SnapshotRecord {
    matrix:   String,
    process:  Option<u32>,
    resource: u32,
    units:    u64,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
enum Target {
    Allocation(u32),
    Need(u32),
    Available,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Snapshot`] from a CSV file.
pub fn load_snapshot_csv(path: &Path) -> BkResult<Snapshot> {
    let file = std::fs::File::open(path)?;
    load_snapshot_reader(file)
}

/// Like [`load_snapshot_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for snapshots embedded
/// in a binary.
pub fn load_snapshot_reader<R: Read>(reader: R) -> BkResult<Snapshot> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut cells: Vec<(Target, u32, u64)> = Vec::new();
    let mut seen: HashSet<(Target, u32)> = HashSet::new();
    let mut processes = 0usize;
    let mut resources = 0usize;

    for (line, result) in csv_reader.deserialize::<SnapshotRecord>().enumerate() {
        let row = result.map_err(|e| BkError::Parse(e.to_string()))?;
        let target = parse_target(&row, line + 2)?;
        check_bounds(target, row.resource, line + 2)?;

        if !seen.insert((target, row.resource)) {
            return Err(BkError::Parse(format!(
                "line {}: {} cell for resource {} listed twice",
                line + 2,
                row.matrix.trim(),
                row.resource
            )));
        }

        if let Target::Allocation(p) | Target::Need(p) = target {
            processes = processes.max(p as usize + 1);
        }
        resources = resources.max(row.resource as usize + 1);
        cells.push((target, row.resource, row.units));
    }

    // ── Fill zeroed grids ─────────────────────────────────────────────────
    let mut allocation = ResourceMatrix::zeroed(processes, resources);
    let mut need = ResourceMatrix::zeroed(processes, resources);
    let mut available = ResourceVector::zeroed(resources);

    for (target, resource, units) in cells {
        let r = ResourceId(resource);
        match target {
            Target::Allocation(p) => allocation.set(ProcessId(p), r, units),
            Target::Need(p)       => need.set(ProcessId(p), r, units),
            Target::Available     => available.set(r, units),
        };
    }

    Snapshot::new(allocation, need, available)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_bounds(target: Target, resource: u32, line: usize) -> BkResult<()> {
    if let Target::Allocation(p) | Target::Need(p) = target {
        if p as usize >= MAX_PROCESSES {
            return Err(BkError::Parse(format!(
                "line {line}: process index {p} exceeds the limit of {MAX_PROCESSES} processes"
            )));
        }
    }
    if resource as usize >= MAX_RESOURCES {
        return Err(BkError::Parse(format!(
            "line {line}: resource index {resource} exceeds the limit of {MAX_RESOURCES} resources"
        )));
    }
    Ok(())
}

fn parse_target(row: &SnapshotRecord, line: usize) -> BkResult<Target> {
    match (row.matrix.trim(), row.process) {
        ("allocation", Some(p)) => Ok(Target::Allocation(p)),
        ("need", Some(p))       => Ok(Target::Need(p)),
        ("available", None)     => Ok(Target::Available),
        ("available", Some(p))  => Err(BkError::Parse(format!(
            "line {line}: available row must leave process empty, got {p}"
        ))),
        ("allocation" | "need", None) => Err(BkError::Parse(format!(
            "line {line}: {} row requires a process index",
            row.matrix.trim()
        ))),
        (other, _) => Err(BkError::Parse(format!(
            "line {line}: unknown matrix {other:?}: expected \"allocation\", \"need\", or \"available\""
        ))),
    }
}
