//! Benchmark Table
//!
//! Average sort time per algorithm per input size. Rows are algorithms in
//! the order they were first recorded; columns are the configured input
//! sizes, shared by every algorithm so series line up for comparison.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while filling a [`BenchmarkTable`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// The algorithm already has a value for every configured size
    #[error("algorithm '{algorithm}' already has all {sizes} sizes recorded")]
    RowFull {
        /// Algorithm identifier
        algorithm: String,
        /// Number of configured sizes
        sizes: usize,
    },

    /// Values must be recorded in configured size order
    #[error("algorithm '{algorithm}': expected size {expected}, got {got}")]
    OutOfOrder {
        /// Algorithm identifier
        algorithm: String,
        /// Next size the row is waiting for
        expected: usize,
        /// Size that was recorded
        got: usize,
    },
}

/// One algorithm's row in the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSeries {
    /// Algorithm identifier
    pub algorithm: String,
    /// Average seconds, aligned with [`BenchmarkTable::input_sizes`]
    pub avg_secs: Vec<f64>,
}

/// Mapping from algorithm to average durations, one per input size
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTable {
    /// Input sizes in benchmark order
    pub input_sizes: Vec<usize>,
    /// One row per algorithm, in first-recorded order
    pub series: Vec<TableSeries>,
}

impl BenchmarkTable {
    /// Empty table over `input_sizes`
    pub fn new(input_sizes: Vec<usize>) -> Self {
        Self {
            input_sizes,
            series: Vec::new(),
        }
    }

    /// Append the average for `algorithm` at `size`.
    ///
    /// Each algorithm's values must arrive in the order of `input_sizes`.
    pub fn record(
        &mut self,
        algorithm: &str,
        size: usize,
        avg_secs: f64,
    ) -> Result<(), TableError> {
        let sizes = self.input_sizes.len();
        let index = match self.series.iter().position(|s| s.algorithm == algorithm) {
            Some(index) => index,
            None => {
                self.series.push(TableSeries {
                    algorithm: algorithm.to_string(),
                    avg_secs: Vec::with_capacity(sizes),
                });
                self.series.len() - 1
            }
        };

        let row = &mut self.series[index];
        let Some(&expected) = self.input_sizes.get(row.avg_secs.len()) else {
            return Err(TableError::RowFull {
                algorithm: algorithm.to_string(),
                sizes,
            });
        };
        if expected != size {
            return Err(TableError::OutOfOrder {
                algorithm: algorithm.to_string(),
                expected,
                got: size,
            });
        }
        row.avg_secs.push(avg_secs);
        Ok(())
    }

    /// Averages recorded for `algorithm`
    pub fn get(&self, algorithm: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.algorithm == algorithm)
            .map(|s| s.avg_secs.as_slice())
    }

    /// Algorithm identifiers in row order
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.algorithm.as_str())
    }

    /// Whether every row has a value for every size
    pub fn is_complete(&self) -> bool {
        self.series
            .iter()
            .all(|s| s.avg_secs.len() == self.input_sizes.len())
    }

    /// Value for `algorithm` at column `size_index`
    pub fn value(&self, algorithm: &str, size_index: usize) -> Option<f64> {
        self.get(algorithm).and_then(|row| row.get(size_index).copied())
    }

    /// How many times faster each algorithm is than `baseline`, per size.
    ///
    /// Returns `None` if `baseline` has no row. A ratio is `None` where
    /// either side is missing or non-positive.
    pub fn speedups(&self, baseline: &str) -> Option<Vec<SpeedupRow>> {
        let base = self.get(baseline)?;
        let rows = self
            .series
            .iter()
            .map(|s| SpeedupRow {
                algorithm: s.algorithm.clone(),
                speedups: (0..self.input_sizes.len())
                    .map(|i| match (base.get(i), s.avg_secs.get(i)) {
                        (Some(&b), Some(&v)) if b > 0.0 && v > 0.0 => Some(b / v),
                        _ => None,
                    })
                    .collect(),
            })
            .collect();
        Some(rows)
    }
}

/// Speed of one algorithm relative to a baseline (`>1.0` = faster)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedupRow {
    /// Algorithm identifier
    pub algorithm: String,
    /// Ratio `baseline / algorithm`, aligned with the table's sizes
    pub speedups: Vec<Option<f64>>,
}
