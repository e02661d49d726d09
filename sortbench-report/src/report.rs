//! Report Data Structures

use crate::table::{BenchmarkTable, SpeedupRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::{AlgorithmInfo, Measurement};
use sortbench_stats::NOISY_CV_THRESHOLD;

/// Current report schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub algorithms: Vec<AlgorithmEntry>,
    pub table: BenchmarkTable,
    pub cells: Vec<CellResult>,
    pub comparison: Option<Comparison>,
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub system: SystemInfo,
    pub config: ReportConfig,
}

/// Benchmark configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub input_sizes: Vec<usize>,
    pub trials: usize,
    pub seed: Option<u64>,
    pub validate: bool,
    pub jobs: usize,
}

/// Host the benchmark ran on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu: String,
    pub cpu_cores: u32,
}

/// Static description of a benchmarked algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmEntry {
    pub name: String,
    pub title: String,
    pub worst_case: String,
    pub extra_space: String,
    pub stable: bool,
}

impl From<&AlgorithmInfo> for AlgorithmEntry {
    fn from(info: &AlgorithmInfo) -> Self {
        Self {
            name: info.name.to_string(),
            title: info.title(),
            worst_case: info.worst_case.to_string(),
            extra_space: info.extra_space.to_string(),
            stable: info.stable,
        }
    }
}

/// Timing detail for one (algorithm, size) cell. Times are in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellResult {
    pub algorithm: String,
    pub size: usize,
    pub trials: usize,
    /// Arithmetic mean over every trial (the value in the table)
    pub mean_secs: f64,
    pub median_secs: f64,
    pub std_dev_secs: f64,
    pub min_secs: f64,
    pub max_secs: f64,
    pub outliers: usize,
    /// Coefficient of variation, percent
    pub cv_percent: f64,
    /// True when the trials vary too much to trust the mean
    pub noisy: bool,
}

const NANOS_PER_SEC: f64 = 1e9;

impl From<&Measurement> for CellResult {
    fn from(m: &Measurement) -> Self {
        let s = &m.summary;
        let cv_percent = s.coefficient_of_variation();
        Self {
            algorithm: m.algorithm.to_string(),
            size: m.size,
            trials: m.trials(),
            mean_secs: m.mean_secs(),
            median_secs: s.median / NANOS_PER_SEC,
            std_dev_secs: s.std_dev / NANOS_PER_SEC,
            min_secs: s.min / NANOS_PER_SEC,
            max_secs: s.max / NANOS_PER_SEC,
            outliers: s.outlier_count,
            cv_percent,
            noisy: m.trials() > 1 && cv_percent > NOISY_CV_THRESHOLD,
        }
    }
}

/// Every algorithm's speed relative to a baseline algorithm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub baseline: String,
    pub input_sizes: Vec<usize>,
    pub rows: Vec<SpeedupRow>,
}

impl Comparison {
    /// Compare every row of `table` against `baseline`
    pub fn from_table(table: &BenchmarkTable, baseline: &str) -> Option<Self> {
        Some(Self {
            baseline: baseline.to_string(),
            input_sizes: table.input_sizes.clone(),
            rows: table.speedups(baseline)?,
        })
    }
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub algorithms: usize,
    pub sizes: usize,
    pub cells: usize,
    pub noisy_cells: usize,
    pub total_duration_ms: f64,
}
