//! Timing Harness
//!
//! Times sort invocations on freshly shuffled data.
//!
//! Every trial shuffles the buffer it was handed before starting the clock,
//! so repeated trials never re-sort already-sorted data. The harness takes
//! ownership of the buffer's contents for the duration of the call: callers
//! that need their original ordering must pass a copy.
//!
//! There are no retries and no timeouts. A sort that never returns blocks
//! the harness; an error from a sort aborts the measurement.

use crate::algorithms::{Element, SortAlgorithm};
use crate::error::SortError;
use crate::measure::Timer;
use rand::Rng;
use rand::seq::SliceRandom;
use sortbench_stats::{OutlierMethod, SummaryStatistics, compute_summary};
use std::time::Duration;

/// Default number of trials averaged by [`avg_sort_time`]
pub const DEFAULT_TRIALS: usize = 500;

/// Shuffle `seq`, then time one `algorithm.sort(seq)` call.
///
/// # Panics
///
/// Panics if the algorithm changes the sequence length. That can only be an
/// algorithm bug and is never recovered from.
pub fn sort_time<A, R>(
    algorithm: &A,
    seq: &mut [Element],
    rng: &mut R,
) -> Result<Duration, SortError>
where
    A: SortAlgorithm + ?Sized,
    R: Rng + ?Sized,
{
    seq.shuffle(rng);
    let len = seq.len();

    let timer = Timer::start();
    let sorted = algorithm.sort(seq)?;
    let elapsed = timer.stop();

    assert_eq!(
        sorted.len(),
        len,
        "{} changed the sequence length",
        algorithm.name()
    );
    std::hint::black_box(sorted);
    Ok(elapsed)
}

/// Arithmetic mean of `trials` independent [`sort_time`] calls on `seq`.
pub fn avg_sort_time<A, R>(
    algorithm: &A,
    seq: &mut [Element],
    trials: usize,
    rng: &mut R,
) -> Result<Duration, SortError>
where
    A: SortAlgorithm + ?Sized,
    R: Rng + ?Sized,
{
    if trials == 0 {
        return Err(SortError::ZeroTrials);
    }

    let mut total = Duration::ZERO;
    for _ in 0..trials {
        total += sort_time(algorithm, seq, rng)?;
    }
    Ok(mean_of(total, trials))
}

/// All trial timings for one algorithm on one input
#[derive(Debug, Clone)]
pub struct Measurement {
    /// Algorithm identifier
    pub algorithm: &'static str,
    /// Input length
    pub size: usize,
    /// Per-trial durations in nanoseconds, in trial order
    pub samples_ns: Vec<f64>,
    /// Arithmetic mean over every trial
    pub mean: Duration,
    /// Distribution summary (outlier-cleaned central tendency)
    pub summary: SummaryStatistics,
}

impl Measurement {
    /// Mean duration in seconds
    pub fn mean_secs(&self) -> f64 {
        self.mean.as_secs_f64()
    }

    /// Number of trials recorded
    pub fn trials(&self) -> usize {
        self.samples_ns.len()
    }
}

/// Like [`avg_sort_time`], but keeps every trial and summarizes them.
pub fn measure<A, R>(
    algorithm: &A,
    seq: &mut [Element],
    trials: usize,
    rng: &mut R,
) -> Result<Measurement, SortError>
where
    A: SortAlgorithm + ?Sized,
    R: Rng + ?Sized,
{
    if trials == 0 {
        return Err(SortError::ZeroTrials);
    }

    let mut total = Duration::ZERO;
    let mut samples_ns = Vec::with_capacity(trials);
    for _ in 0..trials {
        let elapsed = sort_time(algorithm, seq, rng)?;
        total += elapsed;
        samples_ns.push(elapsed.as_nanos() as f64);
    }

    let summary = compute_summary(&samples_ns, OutlierMethod::default());
    Ok(Measurement {
        algorithm: algorithm.name(),
        size: seq.len(),
        samples_ns,
        mean: mean_of(total, trials),
        summary,
    })
}

fn mean_of(total: Duration, trials: usize) -> Duration {
    let nanos = total.as_nanos() / trials as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}
