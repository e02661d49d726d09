#![warn(missing_docs)]
//! SortBench Report - Result Table and Output Formats
//!
//! Holds the [`BenchmarkTable`] the driver fills in and the richer [`Report`]
//! around it, and renders them for downstream consumers:
//! - JSON (full report, or just the table)
//! - CSV (size × algorithm grid, spreadsheet/plotting friendly)
//!
//! Terminal output lives in the CLI crate. No charts are drawn here.

mod csv;
mod json;
#[allow(missing_docs)]
mod report;
mod table;

pub use csv::generate_csv_report;
pub use json::{generate_json_report, generate_json_table};
pub use report::{
    AlgorithmEntry, CellResult, Comparison, Report, ReportConfig, ReportMeta, ReportSummary,
    SCHEMA_VERSION, SystemInfo,
};
pub use table::{BenchmarkTable, SpeedupRow, TableError, TableSeries};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// CSV table of averages
    Csv,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format seconds with an adaptive unit (`ns`, `µs`, `ms`, `s`)
pub fn format_secs(secs: f64) -> String {
    if secs < 1e-6 {
        format!("{:.0} ns", secs * 1e9)
    } else if secs < 1e-3 {
        format!("{:.2} µs", secs * 1e6)
    } else if secs < 1.0 {
        format!("{:.2} ms", secs * 1e3)
    } else {
        format!("{:.3} s", secs)
    }
}
