//! Library sort used as the comparison baseline

use super::{AlgorithmInfo, Element, SortAlgorithm};
use crate::error::SortError;

/// Standard library stable sort
pub struct ReferenceSort;

impl SortAlgorithm for ReferenceSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: "reference_sort",
            worst_case: "O(N log N)",
            extra_space: "O(N)",
            stable: true,
        }
    }

    #[inline]
    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
        seq.sort();
        Ok(seq)
    }
}

/// `slice::sort_by` over a partial order; incomparable pairs count as equal.
pub fn reference_sort<T: PartialOrd>(seq: &mut [T]) -> &mut [T] {
    seq.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    seq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::fixtures::{assert_stable, tagged_input};

    #[test]
    fn test_stable() {
        let mut data = tagged_input();
        assert_stable(reference_sort(&mut data));
    }

    #[test]
    fn test_trait_matches_generic() {
        let mut a = vec![9i64, -3, 4, 4, 0];
        let mut b = a.clone();
        ReferenceSort.sort(&mut a).unwrap();
        reference_sort(&mut b);
        assert_eq!(a, b);
    }
}
