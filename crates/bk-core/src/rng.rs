//! Seeded random snapshot generation.
//!
//! Used for batch runs, demos, and property tests.  Each generated snapshot
//! is drawn from the generator's own `SmallRng`, so a fixed seed reproduces
//! the same sequence of snapshots on every platform.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{BankerConfig, ProcessId, ResourceId, ResourceMatrix, ResourceVector, Snapshot};

/// Deterministic source of random [`Snapshot`]s.
pub struct SnapshotGenerator {
    rng:       SmallRng,
    max_units: u64,
}

impl SnapshotGenerator {
    /// Generator with quantities drawn uniformly from `0..=max_units`.
    pub fn new(seed: u64, max_units: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            max_units,
        }
    }

    pub fn from_config(config: &BankerConfig) -> Self {
        Self::new(config.seed, config.max_units)
    }

    /// A `processes × resources` snapshot with every cell drawn independently.
    ///
    /// No relationship between the three parts is imposed, so a healthy
    /// share of the output is unsafe.
    pub fn generate(&mut self, processes: usize, resources: usize) -> Snapshot {
        let allocation = self.matrix(processes, resources);
        let need = self.matrix(processes, resources);
        let available = self.vector(resources);
        Snapshot::from_parts_unchecked(allocation, need, available)
    }

    /// `count` snapshots of the same shape.
    pub fn generate_many(
        &mut self,
        count:     usize,
        processes: usize,
        resources: usize,
    ) -> Vec<Snapshot> {
        (0..count).map(|_| self.generate(processes, resources)).collect()
    }

    fn vector(&mut self, resources: usize) -> ResourceVector {
        let max = self.max_units;
        (0..resources)
            .map(|_| self.rng.gen_range(0..=max))
            .collect::<Vec<u64>>()
            .into()
    }

    fn matrix(&mut self, processes: usize, resources: usize) -> ResourceMatrix {
        let mut m = ResourceMatrix::zeroed(processes, resources);
        for p in 0..processes as u32 {
            for r in 0..resources as u32 {
                let units = self.rng.gen_range(0..=self.max_units);
                m.set(ProcessId(p), ResourceId(r), units);
            }
        }
        m
    }
}
