//! Sorting Algorithms
//!
//! Every algorithm is available two ways:
//! - a free generic function (`insertion_sort`, `heap_sort`, ...) over any
//!   `PartialOrd` element type, used directly by library callers and by the
//!   stability tests
//! - a unit struct implementing [`SortAlgorithm`] over [`Element`], which is
//!   what the harness and the benchmark driver dispatch on
//!
//! All sorts mutate the caller's buffer and hand the same borrow back.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod reference;
mod selection;

pub use bubble::{BubbleSort, bubble_sort};
pub use heap::{HeapSort, heap_sort};
pub use insertion::{InsertionSort, insertion_sort};
pub use merge::{MergeSort, merge_sort};
pub use quick::{QuickSort, quick_sort};
pub use radix::{RadixSort, radix_sort, radix_sort_by_key};
pub use reference::{ReferenceSort, reference_sort};
pub use selection::{SelectionSort, selection_sort};

use crate::error::SortError;

/// Element type the benchmark harness sorts
pub type Element = i64;

/// Static description of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    /// Stable snake_case identifier (e.g. `"merge_sort"`)
    pub name: &'static str,
    /// Worst-case time complexity
    pub worst_case: &'static str,
    /// Auxiliary space beyond the input buffer
    pub extra_space: &'static str,
    /// Whether equal keys keep their relative order
    pub stable: bool,
}

impl AlgorithmInfo {
    /// Human-readable title, e.g. `"Merge Sort"`
    pub fn title(&self) -> String {
        self.name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A sorting algorithm the harness can time.
///
/// Implementations sort `seq` in place into ascending order and return the
/// same borrow. The output is always a permutation of the input with the same
/// length.
pub trait SortAlgorithm: Send + Sync {
    /// Static description of this algorithm
    fn info(&self) -> AlgorithmInfo;

    /// Sort `seq` in place and return it
    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError>;

    /// Identifier used as the benchmark table key
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Whether equal keys keep their relative order
    fn is_stable(&self) -> bool {
        self.info().stable
    }
}

static ALGORITHMS: &[&dyn SortAlgorithm] = &[
    &BubbleSort,
    &SelectionSort,
    &InsertionSort,
    &MergeSort,
    &HeapSort,
    &QuickSort,
    &RadixSort,
    &ReferenceSort,
];

/// Every registered algorithm, in benchmark order
pub fn all_algorithms() -> &'static [&'static dyn SortAlgorithm] {
    ALGORITHMS
}

/// Look up an algorithm by its identifier
pub fn algorithm_by_name(name: &str) -> Option<&'static dyn SortAlgorithm> {
    ALGORITHMS.iter().copied().find(|alg| alg.name() == name)
}
