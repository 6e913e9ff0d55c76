//! classic: the five-process, three-resource textbook snapshot.
//!
//! Evaluates the snapshot, walks its safe sequence step by step while
//! recording to CSV, writes the evaluation and trace as JSON, then runs a
//! seeded batch of random snapshots and reports how many were safe.
//!
//! Pass a snapshot CSV path as the first argument to replace the built-in
//! snapshot.  Set `RUST_LOG=debug` to see evaluator and driver logs.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bk_core::{load_snapshot_csv, load_snapshot_reader, BankerConfig, Snapshot, SnapshotGenerator};
use bk_output::{CsvWriter, TraceOutputObserver};
use bk_safety::{evaluate_batch_with, summarize, SafetyResult};
use bk_sim::{SimObserver, SimState, Simulation, StepDetail, Trace};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:      &str  = "output/classic";
const BATCH_SIZE:      usize = 10_000;
const BATCH_PROCESSES: usize = 5;
const BATCH_RESOURCES: usize = 3;

// ── Snapshot CSV ──────────────────────────────────────────────────────────────

// Allocation, need, and available for P0..P4 over resources A, B, C.
// Zero cells are omitted.
const SNAPSHOT_CSV: &str = "\
matrix,process,resource,units\n\
allocation,0,1,1\n\
allocation,1,0,2\n\
allocation,2,0,3\n\
allocation,2,2,2\n\
allocation,3,0,2\n\
allocation,3,1,1\n\
allocation,3,2,1\n\
allocation,4,2,2\n\
need,0,0,7\n\
need,0,1,4\n\
need,0,2,3\n\
need,1,0,1\n\
need,1,1,2\n\
need,1,2,2\n\
need,2,0,6\n\
need,3,1,1\n\
need,3,2,1\n\
need,4,0,4\n\
need,4,1,3\n\
need,4,2,1\n\
available,,0,3\n\
available,,1,3\n\
available,,2,2\n\
";

// ── Observer wrapper that also prints ─────────────────────────────────────────

struct PrintingObserver<O: SimObserver> {
    inner: O,
}

impl<O: SimObserver> SimObserver for PrintingObserver<O> {
    fn on_evaluated(&mut self, result: &SafetyResult) {
        self.inner.on_evaluated(result);
    }

    fn on_start(&mut self, trace: &Trace) {
        println!("{:<6} {:<8} {:<10} {:<6} {:<12} {:<12}", "Step", "Process", "Need", "Runs", "Before", "After");
        println!("{}", "-".repeat(58));
        self.inner.on_start(trace);
    }

    fn on_step(&mut self, index: usize, step: &StepDetail) {
        println!(
            "{:<6} {:<8} {:<10} {:<6} {:<12} {:<12}",
            index,
            step.process.to_string(),
            step.need.to_string(),
            if step.can_execute { "yes" } else { "no" },
            step.available_before.to_string(),
            step.available_after.to_string(),
        );
        self.inner.on_step(index, step);
    }

    fn on_complete(&mut self, trace: &Trace) {
        self.inner.on_complete(trace);
    }
}

// ── JSON report ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Report<'a> {
    snapshot: &'a Snapshot,
    result:   Option<&'a SafetyResult>,
    trace:    Option<&'a Trace>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== classic: banker's algorithm ===");
    println!();

    // 1. Load the snapshot.
    let snapshot = match std::env::args().nth(1) {
        Some(path) => load_snapshot_csv(Path::new(&path))?,
        None       => load_snapshot_reader(Cursor::new(SNAPSHOT_CSV))?,
    };
    println!(
        "Snapshot: {} processes, {} resource types, available {}",
        snapshot.process_count(),
        snapshot.resource_count(),
        snapshot.available()
    );

    // 2. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = PrintingObserver { inner: TraceOutputObserver::new(writer) };

    // 3. Evaluate and walk.
    let mut sim = Simulation::new(snapshot);
    let result = sim.evaluate_with(&mut obs).clone();
    match result.witness() {
        Some(seq) => {
            let order: Vec<String> = seq.iter().map(ToString::to_string).collect();
            println!("Safe state. Sequence: {}", order.join(" -> "));
            println!();
            sim.run_to_end(&mut obs)?;
        }
        None => {
            let stuck: Vec<String> = result
                .stuck(sim.snapshot().process_count())
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("Unsafe state. Processes that can never finish: {}", stuck.join(", "));
        }
    }
    debug_assert!(!result.safe || sim.state() == SimState::Complete);

    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. JSON report.
    let report = Report {
        snapshot: sim.snapshot(),
        result:   sim.result(),
        trace:    sim.trace(),
    };
    let json_path = Path::new(OUTPUT_DIR).join("result.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(&report)?)?;
    println!();
    println!("Wrote {}", json_path.display());

    // 5. Random batch.
    let config = BankerConfig { seed: 42, num_threads: None, max_units: 6 };
    config.validate()?;
    let snapshots = SnapshotGenerator::from_config(&config).generate_many(
        BATCH_SIZE,
        BATCH_PROCESSES,
        BATCH_RESOURCES,
    );
    let t0 = Instant::now();
    let results = evaluate_batch_with(&snapshots, &config)?;
    let summary = summarize(&results);
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "batch evaluated");

    println!();
    println!(
        "Batch: {} random {}x{} snapshots, {} safe ({:.1}%), {} unsafe",
        summary.total,
        BATCH_PROCESSES,
        BATCH_RESOURCES,
        summary.safe,
        summary.safe_ratio() * 100.0,
        summary.unsafe_,
    );

    Ok(())
}
