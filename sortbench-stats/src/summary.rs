//! Summary Statistics
//!
//! Mean, median and std-dev come from the outlier-cleaned trials. Min, max
//! and percentiles come from every trial, so a slow tail stays visible.

use crate::outliers::{OutlierAnalysis, OutlierMethod, detect_outliers};
use crate::percentiles::{percentile_of_sorted, sorted_copy};

/// Summary of one set of timing trials (units are whatever the samples use)
#[derive(Debug, Clone)]
pub struct SummaryStatistics {
    // Central tendency (cleaned)
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,

    // Extremes and tail (all trials)
    pub min: f64,
    pub max: f64,
    pub p90: f64,
    pub p99: f64,

    pub sample_count: usize,
    pub outlier_count: usize,
    pub outlier_analysis: OutlierAnalysis,
}

/// Compute summary statistics for `samples`
pub fn compute_summary(samples: &[f64], outlier_method: OutlierMethod) -> SummaryStatistics {
    let analysis = detect_outliers(samples, outlier_method);
    let cleaned = sorted_copy(&analysis.cleaned_samples);
    let all = sorted_copy(samples);

    let mean = if cleaned.is_empty() {
        0.0
    } else {
        cleaned.iter().sum::<f64>() / cleaned.len() as f64
    };

    // Sample (n - 1) standard deviation
    let std_dev = if cleaned.len() < 2 {
        0.0
    } else {
        let variance =
            cleaned.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (cleaned.len() - 1) as f64;
        variance.sqrt()
    };

    SummaryStatistics {
        mean,
        median: percentile_of_sorted(&cleaned, 50.0),
        std_dev,
        min: all.first().copied().unwrap_or(0.0),
        max: all.last().copied().unwrap_or(0.0),
        p90: percentile_of_sorted(&all, 90.0),
        p99: percentile_of_sorted(&all, 99.0),
        sample_count: samples.len(),
        outlier_count: analysis.outlier_indices.len(),
        outlier_analysis: analysis,
    }
}

impl SummaryStatistics {
    /// Coefficient of variation, in percent
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            self.std_dev / self.mean * 100.0
        }
    }

    /// Whether the trials are tight enough to trust the mean
    pub fn is_stable(&self, cv_threshold: f64) -> bool {
        self.coefficient_of_variation() < cv_threshold
    }
}
