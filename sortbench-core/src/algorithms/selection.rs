//! Selection sort

use super::{AlgorithmInfo, Element, SortAlgorithm};
use crate::error::SortError;

/// Selection sort - O(N²) always, in-place, not stable
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: "selection_sort",
            worst_case: "O(N^2)",
            extra_space: "O(1)",
            stable: false,
        }
    }

    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
        Ok(selection_sort(seq))
    }
}

/// Swap the minimum of the remaining suffix into position `k`, for each `k`.
pub fn selection_sort<T: PartialOrd>(seq: &mut [T]) -> &mut [T] {
    let n = seq.len();
    for k in 0..n {
        let mut min = k;
        for j in (k + 1)..n {
            if seq[j] < seq[min] {
                min = j;
            }
        }
        seq.swap(k, min);
    }
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates() {
        let mut data = vec![4, 1, 4, 1, 0, 4];
        assert_eq!(selection_sort(&mut data), &[0, 1, 1, 4, 4, 4]);
    }

    #[test]
    fn test_not_stable() {
        use crate::algorithms::fixtures::Tagged;

        // [2a, 2b, 1]: selecting 1 swaps it with 2a, which lands behind 2b
        let mut data = vec![
            Tagged { key: 2, tag: 0 },
            Tagged { key: 2, tag: 1 },
            Tagged { key: 1, tag: 2 },
        ];
        selection_sort(&mut data);
        let tags: Vec<_> = data.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![2, 1, 0]);
    }
}
