//! Heap sort

use super::{AlgorithmInfo, Element, SortAlgorithm};
use crate::error::SortError;

/// Heap sort - O(N log N) worst case, in-place, not stable
pub struct HeapSort;

impl SortAlgorithm for HeapSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: "heap_sort",
            worst_case: "O(N log N)",
            extra_space: "O(1)",
            stable: false,
        }
    }

    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
        Ok(heap_sort(seq))
    }
}

/// Build a max-heap bottom-up, then repeatedly move the root behind the
/// shrinking heap and restore the heap property.
pub fn heap_sort<T: PartialOrd>(seq: &mut [T]) -> &mut [T] {
    let n = seq.len();
    if n < 2 {
        return seq;
    }

    // Every index below n / 2 has at least one child
    for parent in (0..n / 2).rev() {
        sift_down(seq, parent, n);
    }

    for last in (1..n).rev() {
        seq.swap(0, last);
        sift_down(seq, 0, last);
    }
    seq
}

/// Push `parent` down until neither child in `[0, end)` is larger.
#[inline]
fn sift_down<T: PartialOrd>(seq: &mut [T], mut parent: usize, end: usize) {
    loop {
        let mut larger = 2 * parent + 1;
        if larger >= end {
            break;
        }
        if larger + 1 < end && seq[larger] < seq[larger + 1] {
            larger += 1;
        }
        if seq[larger] > seq[parent] {
            seq.swap(larger, parent);
            parent = larger;
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_max_heap(seq: &[i64]) -> bool {
        (1..seq.len()).all(|i| seq[(i - 1) / 2] >= seq[i])
    }

    #[test]
    fn test_sift_down_builds_heap() {
        let mut data = vec![1, 9, 3, 8, 2, 7, 4, 6, 5];
        let n = data.len();
        for parent in (0..n / 2).rev() {
            sift_down(&mut data, parent, n);
        }
        assert!(is_max_heap(&data));
        assert_eq!(data[0], 9);
    }

    #[test]
    fn test_sift_down_respects_end() {
        // Index 2 lies outside the heap and must not be touched
        let mut data = vec![1, 0, 100];
        sift_down(&mut data, 0, 2);
        assert_eq!(data, vec![1, 0, 100]);
    }

    #[test]
    fn test_even_and_odd_lengths() {
        for n in 2..40i64 {
            let mut data: Vec<i64> = (0..n).map(|i| (i * 7919) % n).collect();
            heap_sort(&mut data);
            assert_eq!(data, (0..n).collect::<Vec<_>>(), "n = {}", n);
        }
    }
}
