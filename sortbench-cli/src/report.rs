//! Report Building
//!
//! Turns a [`BenchmarkRun`] into the serializable [`Report`]: algorithm
//! descriptions, the table, per-cell summaries and the speedup comparison
//! against [`BASELINE_ALGORITHM`] when it took part.

use crate::driver::{BenchmarkConfig, BenchmarkRun};
use crate::metadata::build_report_meta;
use sortbench_core::algorithm_by_name;
use sortbench_report::{AlgorithmEntry, CellResult, Comparison, Report, ReportSummary};

/// Algorithm every other one is compared against
pub const BASELINE_ALGORITHM: &str = "reference_sort";

/// Build a complete Report from a finished run
pub fn build_report(run: &BenchmarkRun, config: &BenchmarkConfig) -> Report {
    let algorithms: Vec<AlgorithmEntry> = run
        .table
        .algorithms()
        .filter_map(algorithm_by_name)
        .map(|alg| AlgorithmEntry::from(&alg.info()))
        .collect();

    let cells: Vec<CellResult> = run.measurements.iter().map(CellResult::from).collect();
    let noisy_cells = cells.iter().filter(|c| c.noisy).count();

    let summary = ReportSummary {
        algorithms: algorithms.len(),
        sizes: run.table.input_sizes.len(),
        cells: cells.len(),
        noisy_cells,
        total_duration_ms: run.elapsed.as_secs_f64() * 1000.0,
    };

    Report {
        meta: build_report_meta(config, run.seed),
        algorithms,
        comparison: Comparison::from_table(&run.table, BASELINE_ALGORITHM),
        table: run.table.clone(),
        cells,
        summary,
    }
}
