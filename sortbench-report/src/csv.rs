//! CSV Output
//!
//! One row per input size, one column per algorithm:
//!
//! ```text
//! size,bubble_sort,merge_sort
//! 100,0.000412000,0.000031000
//! ```
//!
//! Times are seconds. Cells an algorithm never reached are left empty.

use crate::table::BenchmarkTable;

/// Render the table as CSV
pub fn generate_csv_report(table: &BenchmarkTable) -> String {
    let mut output = String::from("size");
    for algorithm in table.algorithms() {
        output.push(',');
        output.push_str(&escape(algorithm));
    }
    output.push('\n');

    for (i, size) in table.input_sizes.iter().enumerate() {
        output.push_str(&size.to_string());
        for series in &table.series {
            output.push(',');
            if let Some(secs) = series.avg_secs.get(i) {
                output.push_str(&format!("{:.9}", secs));
            }
        }
        output.push('\n');
    }
    output
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
