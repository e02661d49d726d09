//! JSON Output

use crate::report::Report;
use crate::table::BenchmarkTable;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Serialize only the table, for plotting tools that want just the series.
pub fn generate_json_table(table: &BenchmarkTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}
