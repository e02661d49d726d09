//! Benchmark Driver
//!
//! Runs every selected algorithm on every configured input size and fills
//! the [`BenchmarkTable`].
//!
//! ## Data Flow
//!
//! ```text
//! BenchmarkConfig
//!        │
//!        ▼
//!   cells (size-major: every algorithm at size 0, then size 1, ...)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  run_cell        │  fresh rand_list → measure → is_sorted
//! └────────┬─────────┘
//!          │
//!          ▼
//!  Measurement ──► BenchmarkTable (mean seconds)
//! ```
//!
//! Each cell owns its input and its RNG, seeded from the run's base seed plus
//! the cell index. A seeded run therefore generates the same inputs whether
//! cells execute sequentially or on a rayon pool.

use crate::config::ConfigError;
use crate::planner::build_plan;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sortbench_core::{
    DEFAULT_TRIALS, Measurement, SortAlgorithm, SortError, Timer, all_algorithms, is_sorted,
    measure, rand_list,
};
use sortbench_report::BenchmarkTable;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Input sizes used when none are configured: `100, 600, ..., 4600`
pub fn default_input_sizes() -> Vec<usize> {
    (100..5000).step_by(500).collect()
}

/// Parameters of one benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Input sizes, in table column order
    pub input_sizes: Vec<usize>,
    /// Timed trials averaged per cell
    pub trials: usize,
    /// Algorithm identifiers, in table row order (empty = all)
    pub algorithms: Vec<String>,
    /// Base seed; `None` draws one from entropy
    pub seed: Option<u64>,
    /// Check each timed output is ascending
    pub validate: bool,
    /// Worker threads (1 = sequential)
    pub jobs: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            input_sizes: default_input_sizes(),
            trials: DEFAULT_TRIALS,
            algorithms: all_algorithms()
                .iter()
                .map(|a| a.name().to_string())
                .collect(),
            seed: None,
            validate: true,
            jobs: 1,
        }
    }
}

impl BenchmarkConfig {
    /// Check sizes, trials and algorithm names, returning the algorithms to run
    pub fn validate(&self) -> Result<Vec<&'static dyn SortAlgorithm>, ConfigError> {
        if self.input_sizes.is_empty() {
            return Err(ConfigError::EmptySizes);
        }
        if self.input_sizes.contains(&0) {
            return Err(ConfigError::ZeroSize);
        }
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(build_plan(&self.algorithms, None)?.algorithms)
    }
}

/// Output of [`run_benchmark`]
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    /// Mean seconds per algorithm per size
    pub table: BenchmarkTable,
    /// Every cell's full measurement, size-major
    pub measurements: Vec<Measurement>,
    /// Base seed the inputs were generated from
    pub seed: u64,
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

/// One (algorithm, size) unit of work
#[derive(Clone, Copy)]
struct Cell {
    index: usize,
    size: usize,
    algorithm: &'static dyn SortAlgorithm,
}

/// RNG for the cell at `cell_index` of a run seeded with `base_seed`
pub fn cell_rng(base_seed: u64, cell_index: usize) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(cell_index as u64))
}

/// Run the benchmark described by `config`.
///
/// `observer` is called once per finished cell, possibly from several
/// threads when `config.jobs > 1`. Any algorithm error aborts the run.
pub fn run_benchmark<F>(config: &BenchmarkConfig, observer: F) -> anyhow::Result<BenchmarkRun>
where
    F: Fn(&Measurement) + Sync,
{
    let algorithms = config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let jobs = config.jobs.max(1);

    let cells: Vec<Cell> = config
        .input_sizes
        .iter()
        .flat_map(|&size| algorithms.iter().map(move |&algorithm| (size, algorithm)))
        .enumerate()
        .map(|(index, (size, algorithm))| Cell {
            index,
            size,
            algorithm,
        })
        .collect();

    info!(
        algorithms = algorithms.len(),
        sizes = config.input_sizes.len(),
        trials = config.trials,
        seed,
        jobs,
        "starting benchmark"
    );

    let start = Instant::now();
    let run_one = |cell: &Cell| -> Result<Measurement, SortError> {
        let measurement = run_cell(cell, config.trials, config.validate, seed)?;
        observer(&measurement);
        Ok(measurement)
    };

    let measurements: Vec<Measurement> = if jobs == 1 || cells.len() <= 1 {
        cells.iter().map(run_one).collect::<Result<_, _>>()?
    } else {
        let pool = ThreadPoolBuilder::new()
            .num_threads(jobs.min(cells.len()))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build worker pool: {}", e))?;
        pool.install(|| cells.par_iter().map(run_one).collect::<Result<_, _>>())?
    };

    let mut table = BenchmarkTable::new(config.input_sizes.clone());
    for m in &measurements {
        table.record(m.algorithm, m.size, m.mean_secs())?;
    }

    let elapsed = start.elapsed();
    info!(cells = measurements.len(), ?elapsed, "benchmark complete");

    Ok(BenchmarkRun {
        table,
        measurements,
        seed,
        elapsed,
    })
}

fn run_cell(
    cell: &Cell,
    trials: usize,
    validate: bool,
    seed: u64,
) -> Result<Measurement, SortError> {
    let timer = Timer::start();
    let mut rng = cell_rng(seed, cell.index);
    let mut data = rand_list(cell.size, &mut rng);

    let measurement = measure(cell.algorithm, &mut data, trials, &mut rng)?;
    if validate && !is_sorted(&data) {
        return Err(SortError::Unsorted {
            algorithm: cell.algorithm.name().to_string(),
        });
    }

    debug!(
        algorithm = measurement.algorithm,
        size = cell.size,
        mean_ns = measurement.mean.as_nanos() as u64,
        cell_ns = timer.stop_nanos(),
        "cell done"
    );
    Ok(measurement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn small_config(algorithms: &[&str]) -> BenchmarkConfig {
        BenchmarkConfig {
            input_sizes: vec![8, 16, 32],
            trials: 3,
            algorithms: algorithms.iter().map(|s| s.to_string()).collect(),
            seed: Some(42),
            validate: true,
            jobs: 1,
        }
    }

    #[test]
    fn test_default_config() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.input_sizes.len(), 10);
        assert_eq!(config.input_sizes[0], 100);
        assert_eq!(config.input_sizes[9], 4600);
        assert_eq!(config.trials, 500);
        assert_eq!(config.algorithms.len(), 8);
        assert_eq!(config.validate().unwrap().len(), 8);
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut config = small_config(&[]);
        config.input_sizes.clear();
        assert_eq!(config.validate().err(), Some(ConfigError::EmptySizes));

        let mut config = small_config(&[]);
        config.input_sizes.push(0);
        assert_eq!(config.validate().err(), Some(ConfigError::ZeroSize));

        let mut config = small_config(&[]);
        config.trials = 0;
        assert_eq!(config.validate().err(), Some(ConfigError::ZeroTrials));

        let config = small_config(&["shell_sort"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_table_aligns_with_sizes() {
        let config = small_config(&["insertion_sort", "merge_sort", "reference_sort"]);
        let calls = AtomicUsize::new(0);
        let run = run_benchmark(&config, |_| {
            calls.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert!(run.table.is_complete());
        assert_eq!(run.table.input_sizes, vec![8, 16, 32]);
        assert_eq!(
            run.table.algorithms().collect::<Vec<_>>(),
            vec!["insertion_sort", "merge_sort", "reference_sort"]
        );
        for row in &run.table.series {
            assert_eq!(row.avg_secs.len(), 3);
            assert!(row.avg_secs.iter().all(|&s| s >= 0.0));
        }
        assert_eq!(run.measurements.len(), 9);
        assert_eq!(calls.load(Ordering::Relaxed), 9);
        assert_eq!(run.seed, 42);
    }

    #[test]
    fn test_measurements_are_size_major() {
        let run = run_benchmark(&small_config(&["heap", "quick"]), |_| {}).unwrap();
        let order: Vec<(&str, usize)> = run
            .measurements
            .iter()
            .map(|m| (m.algorithm, m.size))
            .collect();
        assert_eq!(
            order,
            vec![
                ("heap_sort", 8),
                ("quick_sort", 8),
                ("heap_sort", 16),
                ("quick_sort", 16),
                ("heap_sort", 32),
                ("quick_sort", 32),
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential_layout() {
        let sequential = run_benchmark(&small_config(&[]), |_| {}).unwrap();
        let mut config = small_config(&[]);
        config.jobs = 4;
        let parallel = run_benchmark(&config, |_| {}).unwrap();

        assert!(parallel.table.is_complete());
        assert_eq!(
            parallel.table.algorithms().collect::<Vec<_>>(),
            sequential.table.algorithms().collect::<Vec<_>>()
        );
        for (p, s) in parallel.measurements.iter().zip(&sequential.measurements) {
            assert_eq!((p.algorithm, p.size), (s.algorithm, s.size));
            assert_eq!(p.trials(), 3);
        }
    }

    #[test]
    fn test_cell_inputs_are_reproducible() {
        let a = rand_list(100, &mut cell_rng(7, 3));
        let b = rand_list(100, &mut cell_rng(7, 3));
        let c = rand_list(100, &mut cell_rng(7, 4));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_unseeded_run_records_seed() {
        let mut config = small_config(&["bubble"]);
        config.seed = None;
        let run = run_benchmark(&config, |_| {}).unwrap();
        assert_eq!(run.table.get("bubble_sort").map(<[f64]>::len), Some(3));
    }
}
