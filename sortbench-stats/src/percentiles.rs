//! Percentile Computation

use std::cmp::Ordering;

/// Sort a copy of `samples` ascending; NaNs compare equal to everything.
pub(crate) fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Percentile (0-100) of `samples` by linear interpolation between the two
/// nearest ranks. Returns 0.0 for an empty slice.
///
/// # Examples
///
/// ```
/// # use sortbench_stats::compute_percentile;
/// let trials = [4.0, 1.0, 3.0, 2.0, 5.0];
/// assert_eq!(compute_percentile(&trials, 50.0), 3.0);
/// assert_eq!(compute_percentile(&trials, 100.0), 5.0);
/// ```
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    match samples.len() {
        0 => 0.0,
        1 => samples[0],
        _ => percentile_of_sorted(&sorted_copy(samples), percentile),
    }
}

/// Same as [`compute_percentile`] for input already sorted ascending
pub(crate) fn percentile_of_sorted(sorted: &[f64], percentile: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let last = sorted.len() - 1;
    let rank = (percentile.clamp(0.0, 100.0) / 100.0) * last as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(last);
    let fraction = rank - lower as f64;

    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        assert!((compute_percentile(&[5.0, 1.0, 3.0], 50.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_even_interpolates() {
        assert!((compute_percentile(&[1.0, 2.0, 3.0, 4.0], 50.0) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quartiles() {
        let samples: Vec<f64> = (1..=100).map(|x| x as f64).collect();
        assert!((compute_percentile(&samples, 25.0) - 25.75).abs() < 1e-9);
        assert!((compute_percentile(&samples, 75.0) - 75.25).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_percentile_clamps() {
        let samples = [1.0, 2.0, 3.0];
        assert_eq!(compute_percentile(&samples, 150.0), 3.0);
        assert_eq!(compute_percentile(&samples, -5.0), 1.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(compute_percentile(&[], 50.0), 0.0);
        assert_eq!(compute_percentile(&[42.0], 99.0), 42.0);
    }
}
