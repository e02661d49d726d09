//! Outlier Detection
//!
//! Timing trials pick up scheduler hiccups and page faults. Trials outside
//! the Tukey fences are flagged and excluded from the cleaned set used for
//! mean/median/std-dev. Min, max and percentiles still see every trial.

use crate::percentiles::compute_percentile;

/// Method for outlier detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlierMethod {
    /// Tukey fences: outside `[Q1 - k*IQR, Q3 + k*IQR]`
    Iqr {
        /// Fence multiplier
        k: f64,
    },
    /// Keep every sample
    None,
}

impl Default for OutlierMethod {
    fn default() -> Self {
        OutlierMethod::Iqr { k: 1.5 }
    }
}

/// Result of outlier analysis
#[derive(Debug, Clone)]
pub struct OutlierAnalysis {
    /// Samples inside the fences, in original order
    pub cleaned_samples: Vec<f64>,
    /// Indices of flagged samples
    pub outlier_indices: Vec<usize>,
    /// Number of samples below the lower fence
    pub low_outlier_count: usize,
    /// Number of samples above the upper fence
    pub high_outlier_count: usize,
    /// Lower fence
    pub lower_bound: f64,
    /// Upper fence
    pub upper_bound: f64,
}

impl OutlierAnalysis {
    /// Share of samples flagged, in percent
    pub fn outlier_percentage(&self) -> f64 {
        let total = self.cleaned_samples.len() + self.outlier_indices.len();
        if total == 0 {
            return 0.0;
        }
        self.outlier_indices.len() as f64 / total as f64 * 100.0
    }
}

/// Split `samples` into kept and flagged trials
pub fn detect_outliers(samples: &[f64], method: OutlierMethod) -> OutlierAnalysis {
    let (lower_bound, upper_bound) = match method {
        OutlierMethod::None => (f64::NEG_INFINITY, f64::INFINITY),
        OutlierMethod::Iqr { .. } if samples.is_empty() => (0.0, 0.0),
        OutlierMethod::Iqr { k } => {
            let q1 = compute_percentile(samples, 25.0);
            let q3 = compute_percentile(samples, 75.0);
            let iqr = q3 - q1;
            (q1 - k * iqr, q3 + k * iqr)
        }
    };

    let mut analysis = OutlierAnalysis {
        cleaned_samples: Vec::with_capacity(samples.len()),
        outlier_indices: Vec::new(),
        low_outlier_count: 0,
        high_outlier_count: 0,
        lower_bound,
        upper_bound,
    };

    for (i, &sample) in samples.iter().enumerate() {
        if sample < lower_bound {
            analysis.outlier_indices.push(i);
            analysis.low_outlier_count += 1;
        } else if sample > upper_bound {
            analysis.outlier_indices.push(i);
            analysis.high_outlier_count += 1;
        } else {
            analysis.cleaned_samples.push(sample);
        }
    }
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_outliers() {
        let result = detect_outliers(&[10.0, 11.0, 12.0, 13.0, 14.0], OutlierMethod::default());
        assert!(result.outlier_indices.is_empty());
        assert_eq!(result.cleaned_samples.len(), 5);
    }

    #[test]
    fn test_scheduler_spike_flagged() {
        let samples = [10.0, 11.0, 12.0, 13.0, 14.0, 400.0];
        let result = detect_outliers(&samples, OutlierMethod::default());
        assert_eq!(result.outlier_indices, vec![5]);
        assert_eq!(result.high_outlier_count, 1);
        assert_eq!(result.cleaned_samples.len(), 5);
        assert!(result.outlier_percentage() > 16.0 && result.outlier_percentage() < 17.0);
    }

    #[test]
    fn test_none_keeps_everything() {
        let result = detect_outliers(&[1.0, 2.0, 1000.0], OutlierMethod::None);
        assert!(result.outlier_indices.is_empty());
        assert_eq!(result.cleaned_samples, vec![1.0, 2.0, 1000.0]);
    }

    #[test]
    fn test_empty_samples() {
        let result = detect_outliers(&[], OutlierMethod::default());
        assert!(result.cleaned_samples.is_empty());
        assert_eq!(result.outlier_percentage(), 0.0);
    }
}
