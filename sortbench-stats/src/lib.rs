//! SortBench Statistics
//!
//! Summarizes the per-trial durations collected by the timing harness:
//! - Percentiles by linear interpolation
//! - Tukey-fence outlier detection
//! - Mean / median / std-dev over cleaned trials, extremes over all trials

mod outliers;
mod percentiles;
mod summary;

pub use outliers::{OutlierAnalysis, OutlierMethod, detect_outliers};
pub use percentiles::compute_percentile;
pub use summary::{SummaryStatistics, compute_summary};

/// Coefficient of variation (percent) above which a cell is reported as noisy
pub const NOISY_CV_THRESHOLD: f64 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!((NOISY_CV_THRESHOLD - 10.0).abs() < f64::EPSILON);
    }
}
