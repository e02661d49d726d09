#![warn(missing_docs)]
//! # SortBench
//!
//! Classic sorting algorithms and a harness that times them.
//!
//! SortBench provides:
//! - **Eight Algorithms**: bubble, selection, insertion, merge, heap, quick, radix and a
//!   library-sort baseline, each as a generic function and behind the [`SortAlgorithm`] trait
//! - **Correctness Checking**: [`is_sorted`] and [`verify_algorithm`] on any output
//! - **Shuffle-then-Time Harness**: [`sort_time`] shuffles before every trial so repeated
//!   trials never re-sort sorted data; [`avg_sort_time`] averages them
//! - **Benchmark Driver**: [`run_benchmark`] fills a [`BenchmarkTable`] of average seconds per
//!   algorithm per input size, sequentially or across a rayon pool
//! - **Reports**: JSON, CSV and a terminal table with speedups against `reference_sort`
//!
//! ## Quick Start
//!
//! ```
//! use sortbench::{MergeSort, SortAlgorithm, avg_sort_time, is_sorted, rand_list};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut data = rand_list(100, &mut rng);
//! let avg = avg_sort_time(&MergeSort, &mut data, 10, &mut rng).unwrap();
//! assert!(is_sorted(&data));
//! println!("{}: {:?}", MergeSort.name(), avg);
//! ```
//!
//! ## Benchmark Table
//!
//! ```
//! use sortbench::{BenchmarkConfig, run_benchmark};
//!
//! let config = BenchmarkConfig {
//!     input_sizes: vec![10, 20],
//!     trials: 2,
//!     algorithms: vec!["insertion_sort".into(), "reference_sort".into()],
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let run = run_benchmark(&config, |_| {}).unwrap();
//! assert_eq!(run.table.get("insertion_sort").map(|row| row.len()), Some(2));
//! ```

// Re-export core types
pub use sortbench_core::{
    AlgorithmInfo, BubbleSort, DEFAULT_TRIALS, Element, HeapSort, InsertionSort, Measurement,
    MergeSort, QuickSort, RadixSort, ReferenceSort, SelectionSort, SortAlgorithm, SortError,
    Timer, algorithm_by_name, all_algorithms, avg_sort_time, bubble_sort, heap_sort,
    insertion_sort, is_sorted, measure, merge_sort, quick_sort, radix_sort, radix_sort_by_key,
    rand_list, rand_list_in, reference_sort, selection_sort, sort_time, verify_algorithm,
};

// Re-export stats
pub use sortbench_stats::{OutlierMethod, SummaryStatistics, compute_summary};

// Re-export report types
pub use sortbench_report::{
    BenchmarkTable, OutputFormat, Report, TableError, format_secs, generate_csv_report,
    generate_json_report,
};

// Re-export driver and configuration
pub use sortbench_cli::{
    BenchmarkConfig, BenchmarkRun, ConfigError, SortbenchConfig, build_report,
    default_input_sizes, format_human_output, run_benchmark,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkConfig, Element, SortAlgorithm, all_algorithms, avg_sort_time, is_sorted,
        rand_list, run_benchmark, sort_time,
    };
}

/// Run the SortBench CLI.
///
/// This is what the `sortbench` binary calls:
/// ```ignore
/// fn main() {
///     sortbench::run().unwrap();
/// }
/// ```
pub use sortbench_cli::run;
