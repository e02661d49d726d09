//! Insertion sort

use super::{AlgorithmInfo, Element, SortAlgorithm};
use crate::error::SortError;

/// Insertion sort - O(N²) worst case, in-place, stable
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: "insertion_sort",
            worst_case: "O(N^2)",
            extra_space: "O(1)",
            stable: true,
        }
    }

    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
        Ok(insertion_sort(seq))
    }
}

/// Grow a sorted prefix one element at a time, shifting larger prefix
/// elements one slot right to open a hole for the new key.
pub fn insertion_sort<T: PartialOrd + Clone>(seq: &mut [T]) -> &mut [T] {
    for j in 1..seq.len() {
        let key = seq[j].clone();
        let mut i = j;
        // Strict comparison keeps equal keys in place (stability)
        while i > 0 && seq[i - 1] > key {
            seq[i] = seq[i - 1].clone();
            i -= 1;
        }
        seq[i] = key;
    }
    seq
}
