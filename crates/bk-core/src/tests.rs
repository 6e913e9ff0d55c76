//! Unit tests for bk-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ProcessId, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = ProcessId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(ProcessId::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(ProcessId(7).to_string(), "P7");
        assert_eq!(ResourceId(0).to_string(), "R0");
    }
}

#[cfg(test)]
mod vector {
    use crate::{ResourceId, ResourceVector};

    #[test]
    fn covers_is_componentwise() {
        let work = ResourceVector::from([3, 3, 2]);
        assert!(work.covers(&ResourceVector::from([1, 2, 2])));
        assert!(work.covers(&ResourceVector::from([3, 3, 2])));
        assert!(!work.covers(&ResourceVector::from([0, 4, 0])));
    }

    #[test]
    fn covers_rejects_length_mismatch() {
        let work = ResourceVector::from([5, 5]);
        assert!(!work.covers(&ResourceVector::from([1])));
    }

    #[test]
    fn empty_covers_empty() {
        assert!(ResourceVector::zeroed(0).covers(&ResourceVector::zeroed(0)));
    }

    #[test]
    fn add_assign_saturates() {
        let mut v = ResourceVector::from([u64::MAX - 1, 1]);
        v.add_assign(&ResourceVector::from([5, 2]));
        assert_eq!(v.as_slice(), &[u64::MAX, 3]);
    }

    #[test]
    fn set_out_of_range_is_ignored() {
        let mut v = ResourceVector::zeroed(2);
        assert!(v.set(ResourceId(1), 9));
        assert!(!v.set(ResourceId(2), 9));
        assert_eq!(v.as_slice(), &[0, 9]);
    }

    #[test]
    fn display_space_separated() {
        assert_eq!(ResourceVector::from([3, 3, 2]).to_string(), "[3 3 2]");
        assert_eq!(ResourceVector::zeroed(0).to_string(), "[]");
    }
}

#[cfg(test)]
mod snapshot {
    use crate::{BkError, ProcessId, ResourceId, ResourceMatrix, ResourceVector, Snapshot};

    #[test]
    fn from_rows_accepts_consistent_shape() {
        let s = Snapshot::from_rows(
            vec![vec![0, 1], vec![2, 0]],
            vec![vec![1, 1], vec![0, 0]],
            vec![1, 1],
        )
        .unwrap();
        assert_eq!(s.process_count(), 2);
        assert_eq!(s.resource_count(), 2);
        assert_eq!(s.need().get(ProcessId(0), ResourceId(1)), Some(1));
    }

    #[test]
    fn ragged_row_is_dimension_mismatch() {
        let err = Snapshot::from_rows(vec![vec![0, 1], vec![2]], vec![vec![0, 0], vec![0, 0]], vec![1, 1])
            .unwrap_err();
        assert!(matches!(err, BkError::DimensionMismatch { expected: 2, got: 1, .. }), "{err}");
    }

    #[test]
    fn row_count_mismatch() {
        let err = Snapshot::from_rows(vec![vec![0]], vec![vec![0], vec![1]], vec![1]).unwrap_err();
        assert!(matches!(
            err,
            BkError::DimensionMismatch { what: "need matrix rows", expected: 1, got: 2 }
        ));
    }

    #[test]
    fn column_count_mismatch_via_new() {
        let err = Snapshot::new(
            ResourceMatrix::zeroed(2, 3),
            ResourceMatrix::zeroed(2, 3),
            ResourceVector::zeroed(2),
        )
        .unwrap_err();
        assert!(matches!(err, BkError::DimensionMismatch { what: "allocation matrix columns", .. }));
    }

    #[test]
    fn zero_processes_keeps_resource_count() {
        let s = Snapshot::zeroed(0, 3);
        assert_eq!(s.process_count(), 0);
        assert_eq!(s.resource_count(), 3);
        assert_eq!(s.allocation().resource_count(), 3);
    }

    #[test]
    fn editors_copy_on_write() {
        let base = Snapshot::zeroed(2, 2);
        let edited = base.with_need(ProcessId(1), ResourceId(0), 4).unwrap();
        assert_eq!(base.need().get(ProcessId(1), ResourceId(0)), Some(0));
        assert_eq!(edited.need().get(ProcessId(1), ResourceId(0)), Some(4));

        let edited = edited.with_allocation(ProcessId(0), ResourceId(1), 2).unwrap();
        let edited = edited.with_available(ResourceId(1), 7).unwrap();
        assert_eq!(edited.allocation().get(ProcessId(0), ResourceId(1)), Some(2));
        assert_eq!(edited.available().as_slice(), &[0, 7]);
    }

    #[test]
    fn editors_reject_out_of_range() {
        let base = Snapshot::zeroed(2, 2);
        assert!(matches!(
            base.with_allocation(ProcessId(2), ResourceId(0), 1),
            Err(BkError::UnknownProcess { process_count: 2, .. })
        ));
        assert!(matches!(
            base.with_available(ResourceId(5), 1),
            Err(BkError::UnknownResource { resource_count: 2, .. })
        ));
    }

    #[test]
    fn resized_discards_values() {
        let base = Snapshot::from_rows(vec![vec![1]], vec![vec![1]], vec![1]).unwrap();
        let r = base.resized(3, 2);
        assert_eq!(r, Snapshot::zeroed(3, 2));
    }
}

#[cfg(test)]
mod config {
    use crate::{BankerConfig, BkError};

    #[test]
    fn default_is_valid() {
        BankerConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_max_units_rejected() {
        let cfg = BankerConfig { max_units: 0, ..BankerConfig::default() };
        assert!(matches!(cfg.validate(), Err(BkError::Config(_))));
    }

    #[test]
    fn zero_threads_rejected() {
        let cfg = BankerConfig { num_threads: Some(0), ..BankerConfig::default() };
        assert!(matches!(cfg.validate(), Err(BkError::Config(_))));
    }
}

#[cfg(test)]
mod rng {
    use proptest::prelude::*;

    use crate::SnapshotGenerator;

    #[test]
    fn same_seed_same_snapshots() {
        let a = SnapshotGenerator::new(7, 5).generate_many(4, 3, 2);
        let b = SnapshotGenerator::new(7, 5).generate_many(4, 3, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = SnapshotGenerator::new(1, 100).generate_many(8, 4, 4);
        let b = SnapshotGenerator::new(2, 100).generate_many(8, 4, 4);
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn generated_shape_and_bounds(seed in any::<u64>(), p in 0usize..8, r in 0usize..5, max in 1u64..20) {
            let s = SnapshotGenerator::new(seed, max).generate(p, r);
            prop_assert_eq!(s.process_count(), p);
            prop_assert_eq!(s.resource_count(), r);
            prop_assert!(s.available().as_slice().iter().all(|&u| u <= max));
            for row in s.allocation().rows().iter().chain(s.need().rows()) {
                prop_assert_eq!(row.len(), r);
                prop_assert!(row.as_slice().iter().all(|&u| u <= max));
            }
        }
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_snapshot_reader, BkError, Snapshot};

    const HEADER: &str = "matrix,process,resource,units\n";

    fn load(body: &str) -> Result<Snapshot, BkError> {
        load_snapshot_reader(Cursor::new(format!("{HEADER}{body}")))
    }

    #[test]
    fn canonical_scenario() {
        let s = load(
            "allocation,0,0,1\n\
             need,1,0,2\n\
             need,2,0,1\n\
             available,,0,2\n",
        )
        .unwrap();
        let expected = Snapshot::from_rows(
            vec![vec![1], vec![0], vec![0]],
            vec![vec![0], vec![2], vec![1]],
            vec![2],
        )
        .unwrap();
        assert_eq!(s, expected);
    }

    #[test]
    fn empty_file_is_empty_snapshot() {
        let s = load("").unwrap();
        assert_eq!(s, Snapshot::zeroed(0, 0));
    }

    #[test]
    fn duplicate_cell_rejected() {
        let err = load("need,0,0,1\nneed,0,0,2\n").unwrap_err();
        assert!(matches!(err, BkError::Parse(ref m) if m.contains("twice")), "{err}");
    }

    #[test]
    fn same_cell_in_different_matrices_ok() {
        let s = load("need,0,0,1\nallocation,0,0,2\n").unwrap();
        assert_eq!(s.process_count(), 1);
    }

    #[test]
    fn available_with_process_rejected() {
        assert!(matches!(load("available,0,0,1\n"), Err(BkError::Parse(_))));
    }

    #[test]
    fn matrix_row_without_process_rejected() {
        assert!(matches!(load("need,,0,1\n"), Err(BkError::Parse(_))));
    }

    #[test]
    fn unknown_matrix_rejected() {
        let err = load("max,0,0,1\n").unwrap_err();
        assert!(matches!(err, BkError::Parse(ref m) if m.contains("unknown matrix")));
    }

    #[test]
    fn negative_units_rejected() {
        assert!(matches!(load("need,0,0,-1\n"), Err(BkError::Parse(_))));
    }

    #[test]
    fn huge_process_index_rejected() {
        let err = load("allocation,4294967295,0,1\n").unwrap_err();
        assert!(matches!(err, BkError::Parse(ref m) if m.contains("process index")), "{err}");
    }

    #[test]
    fn huge_resource_index_rejected() {
        let err = load("available,,4294967295,1\n").unwrap_err();
        assert!(matches!(err, BkError::Parse(ref m) if m.contains("resource index")), "{err}");
    }

    #[test]
    fn largest_allowed_indices_load() {
        let body = format!(
            "need,{},0,1\navailable,,{},1\n",
            crate::MAX_PROCESSES - 1,
            crate::MAX_RESOURCES - 1
        );
        let s = load(&body).unwrap();
        assert_eq!(s.process_count(), crate::MAX_PROCESSES);
        assert_eq!(s.resource_count(), crate::MAX_RESOURCES);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_snapshot_csv(std::path::Path::new("/nonexistent/snapshot.csv")).unwrap_err();
        assert!(matches!(err, BkError::Io(_)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_shapes {
    use crate::{ResourceMatrix, ResourceVector, Snapshot};

    fn canonical() -> Snapshot {
        Snapshot::from_rows(
            vec![vec![1], vec![0], vec![0]],
            vec![vec![0], vec![2], vec![1]],
            vec![2],
        )
        .unwrap()
    }

    #[test]
    fn snapshot_round_trip() {
        let s = canonical();
        let json = serde_json::to_string(&s).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn vector_is_a_plain_array() {
        let v = ResourceVector::from([3, 3, 2]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[3,3,2]");
    }

    #[test]
    fn ragged_matrix_rejected() {
        let json = r#"{"rows":[[0,0]],"resources":1}"#;
        let err = serde_json::from_str::<ResourceMatrix>(json).unwrap_err();
        assert!(err.to_string().contains("matrix row has length 2, expected 1"), "{err}");
    }

    #[test]
    fn mismatched_row_counts_rejected() {
        let json = r#"{
            "allocation": {"rows": [[0], [0]], "resources": 1},
            "need":       {"rows": [[0]],      "resources": 1},
            "available":  [0]
        }"#;
        assert!(serde_json::from_str::<Snapshot>(json).is_err());
    }

    #[test]
    fn column_count_disagreeing_with_available_rejected() {
        let json = r#"{
            "allocation": {"rows": [[0, 0]], "resources": 2},
            "need":       {"rows": [[0, 0]], "resources": 2},
            "available":  [0]
        }"#;
        assert!(serde_json::from_str::<Snapshot>(json).is_err());
    }
}
