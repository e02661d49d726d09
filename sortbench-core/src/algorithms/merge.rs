//! Merge sort

use super::{AlgorithmInfo, Element, SortAlgorithm};
use crate::error::SortError;

/// Top-down merge sort - O(N log N) worst case, O(N) scratch, stable
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: "merge_sort",
            worst_case: "O(N log N)",
            extra_space: "O(N)",
            stable: true,
        }
    }

    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
        Ok(merge_sort(seq))
    }
}

/// Recursively sort both halves, then merge them back into `seq`.
///
/// A single scratch buffer of the input's length is allocated up front and
/// shared by every level of the recursion. Depth is `O(log N)`.
pub fn merge_sort<T: PartialOrd + Clone>(seq: &mut [T]) -> &mut [T] {
    if seq.len() > 1 {
        let mut scratch = seq.to_vec();
        sort_halves(seq, &mut scratch);
    }
    seq
}

/// `scratch` must be exactly as long as `seq`
fn sort_halves<T: PartialOrd + Clone>(seq: &mut [T], scratch: &mut [T]) {
    let len = seq.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = seq.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        sort_halves(left, left_scratch);
        sort_halves(right, right_scratch);
    }

    scratch.clone_from_slice(seq);
    let (left, right) = scratch.split_at(mid);
    merge(left, right, seq);
}

/// Merge two sorted runs into `out` (`out.len() == left.len() + right.len()`).
fn merge<T: PartialOrd + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        // Ties take from the left run (stability)
        if right[j] < left[i] {
            out[k] = right[j].clone();
            j += 1;
        } else {
            out[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }

    // At most one of these drains has anything left
    for item in &left[i..] {
        out[k] = item.clone();
        k += 1;
    }
    for item in &right[j..] {
        out[k] = item.clone();
        k += 1;
    }
    debug_assert_eq!(k, out.len());
}
