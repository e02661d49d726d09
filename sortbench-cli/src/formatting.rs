//! Output Formatting
//!
//! Human-readable terminal output for benchmark reports:
//! - Average sort time grid (algorithms × input sizes)
//! - Speedup grid against the baseline algorithm
//! - Run summary

use sortbench_report::{Report, format_secs};
use std::collections::HashSet;

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SortBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let cfg = &report.meta.config;
    output.push_str(&format!(
        "  trials: {}  seed: {}  cpu: {} ({} cores)\n\n",
        cfg.trials,
        cfg.seed.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
        report.meta.system.cpu,
        report.meta.system.cpu_cores
    ));

    let sizes: Vec<String> = report.table.input_sizes.iter().map(|s| s.to_string()).collect();
    let names: Vec<&str> = report.table.algorithms().collect();

    let noisy: HashSet<(&str, usize)> = report
        .cells
        .iter()
        .filter(|c| c.noisy)
        .map(|c| (c.algorithm.as_str(), c.size))
        .collect();

    output.push_str("Average Sort Time\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    let rows: Vec<Vec<String>> = report
        .table
        .series
        .iter()
        .map(|series| {
            report
                .table
                .input_sizes
                .iter()
                .enumerate()
                .map(|(i, &size)| match series.avg_secs.get(i) {
                    Some(&secs) if noisy.contains(&(series.algorithm.as_str(), size)) => {
                        format!("{}*", format_secs(secs))
                    }
                    Some(&secs) => format_secs(secs),
                    None => "-".to_string(),
                })
                .collect()
        })
        .collect();
    push_grid(&mut output, "size", &sizes, &names, &rows);

    if !noisy.is_empty() {
        output.push_str("  * noisy: trial spread too wide to trust the mean\n");
    }

    if let Some(cmp) = &report.comparison {
        output.push_str(&format!("\nSpeedup vs {}\n", cmp.baseline));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        let row_names: Vec<&str> = cmp.rows.iter().map(|r| r.algorithm.as_str()).collect();
        let rows: Vec<Vec<String>> = cmp
            .rows
            .iter()
            .map(|r| {
                r.speedups
                    .iter()
                    .map(|s| match s {
                        Some(x) => format!("{:.2}x", x),
                        None => "-".to_string(),
                    })
                    .collect()
            })
            .collect();
        push_grid(&mut output, "size", &sizes, &row_names, &rows);
    }

    // Summary
    output.push_str("\nSummary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  Algorithms: {}  Sizes: {}  Cells: {}  Noisy: {}\n",
        report.summary.algorithms,
        report.summary.sizes,
        report.summary.cells,
        report.summary.noisy_cells
    ));
    output.push_str(&format!(
        "  Duration: {:.2} ms\n",
        report.summary.total_duration_ms
    ));

    output
}

/// Append a `name | col | col ...` grid
fn push_grid(
    output: &mut String,
    corner: &str,
    columns: &[String],
    row_names: &[&str],
    rows: &[Vec<String>],
) {
    let name_width = row_names
        .iter()
        .map(|n| n.len())
        .chain(std::iter::once(corner.len()))
        .max()
        .unwrap_or(12);
    let col_width = columns
        .iter()
        .map(|c| c.chars().count())
        .chain(rows.iter().flatten().map(|v| v.chars().count()))
        .max()
        .unwrap_or(8)
        .max(10);

    // Header row with column labels
    output.push_str(&format!("  {:<width$}", corner, width = name_width));
    for c in columns {
        output.push_str(&format!(" | {:>w$}", c, w = col_width));
    }
    output.push('\n');

    // Separator
    output.push_str(&format!("  {}", "-".repeat(name_width)));
    for _ in columns {
        output.push_str(&format!("-+-{}", "-".repeat(col_width)));
    }
    output.push('\n');

    for (name, row) in row_names.iter().zip(rows) {
        output.push_str(&format!("  {:<width$}", name, width = name_width));
        for value in row {
            output.push_str(&format!(" | {:>w$}", value, w = col_width));
        }
        output.push('\n');
    }
}
