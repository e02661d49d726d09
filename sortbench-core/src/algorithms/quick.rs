//! Quicksort

use super::{AlgorithmInfo, Element, SortAlgorithm};
use crate::error::SortError;

/// Quicksort with first-element pivot - O(N²) worst case, not stable
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: "quick_sort",
            worst_case: "O(N^2)",
            extra_space: "O(log N)",
            stable: false,
        }
    }

    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
        Ok(quick_sort(seq))
    }
}

/// Partition around the first element, then sort both sides.
///
/// Recursion is replaced by an explicit stack of half-open ranges. The larger
/// side is deferred on the stack and the smaller side is processed
/// immediately, which bounds the stack at `O(log N)` entries even on
/// already-sorted input where the partition degenerates.
pub fn quick_sort<T: PartialOrd>(seq: &mut [T]) -> &mut [T] {
    if seq.len() < 2 {
        return seq;
    }

    let mut pending = vec![(0, seq.len())];
    while let Some((mut lo, mut hi)) = pending.pop() {
        while hi - lo > 1 {
            let split = partition(seq, lo, hi);
            let left_len = split - lo;
            let right_len = hi - split - 1;
            if left_len < right_len {
                pending.push((split + 1, hi));
                hi = split;
            } else {
                pending.push((lo, split));
                lo = split + 1;
            }
        }
    }
    seq
}

/// Hoare-style partition of `seq[lo..hi]` (at least two elements) with
/// `seq[lo]` as pivot. Returns the pivot's final index: everything before it
/// is `<=` pivot, everything after it is `>=` pivot.
fn partition<T: PartialOrd>(seq: &mut [T], lo: usize, hi: usize) -> usize {
    let mut left = lo + 1;
    let mut right = hi - 1;

    loop {
        while left <= right && seq[left] <= seq[lo] {
            left += 1;
        }
        while right >= left && seq[right] >= seq[lo] {
            right -= 1;
        }
        if right < left {
            break;
        }
        seq.swap(left, right);
    }

    // right >= lo here: it only moves while right >= left > lo
    seq.swap(lo, right);
    right
}
