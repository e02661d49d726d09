//! Bubble sort

use super::{AlgorithmInfo, Element, SortAlgorithm};
use crate::error::SortError;

/// Bubble sort with early exit - O(N²) worst case, in-place, stable
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: "bubble_sort",
            worst_case: "O(N^2)",
            extra_space: "O(1)",
            stable: true,
        }
    }

    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
        Ok(bubble_sort(seq))
    }
}

/// Adjacent-swap passes. Each pass parks the largest unsorted element at the
/// end of the unsorted region, so the region shrinks by one per pass. A pass
/// without swaps means the rest is already ordered.
pub fn bubble_sort<T: PartialOrd>(seq: &mut [T]) -> &mut [T] {
    let mut unsorted_end = seq.len();
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 1..unsorted_end {
            if seq[i] < seq[i - 1] {
                seq.swap(i, i - 1);
                swapped = true;
            }
        }
        unsorted_end = unsorted_end.saturating_sub(1);
    }
    seq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::fixtures::{assert_stable, tagged_input};

    #[test]
    fn test_stable() {
        let mut data = tagged_input();
        assert_stable(bubble_sort(&mut data));
    }

    #[test]
    fn test_already_sorted_single_pass() {
        // Sorted input stays untouched
        let mut data: Vec<u32> = (0..1000).collect();
        bubble_sort(&mut data);
        assert_eq!(data, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_two_elements() {
        let mut data = vec![5, 3];
        assert_eq!(bubble_sort(&mut data), &[3, 5]);
    }
}
