#![warn(missing_docs)]
//! SortBench Core - Algorithms and Timing Harness
//!
//! This crate provides everything needed to sort and time a sequence:
//! - Eight in-place sorting algorithms behind the [`SortAlgorithm`] trait
//! - [`is_sorted`] correctness checker
//! - Shuffle-then-time harness ([`sort_time`], [`avg_sort_time`], [`measure`])
//! - Random input generation ([`rand_list`])

mod algorithms;
mod check;
mod error;
mod harness;
mod input;
mod measure;

pub use algorithms::{
    AlgorithmInfo, BubbleSort, Element, HeapSort, InsertionSort, MergeSort, QuickSort, RadixSort,
    ReferenceSort, SelectionSort, SortAlgorithm, algorithm_by_name, all_algorithms, bubble_sort,
    heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort, radix_sort_by_key,
    reference_sort, selection_sort,
};
pub use check::{is_sorted, verify_algorithm};
pub use error::SortError;
pub use harness::{DEFAULT_TRIALS, Measurement, avg_sort_time, measure, sort_time};
pub use input::{rand_list, rand_list_in};
pub use measure::Timer;
