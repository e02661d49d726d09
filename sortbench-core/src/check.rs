//! Correctness Checking

use crate::algorithms::{Element, SortAlgorithm};
use crate::error::SortError;

/// Check that `seq` is in ascending order.
///
/// Stops at the first adjacent inversion. Empty and single-element slices
/// are trivially sorted.
pub fn is_sorted<T: PartialOrd>(seq: &[T]) -> bool {
    for i in 1..seq.len() {
        if seq[i] < seq[i - 1] {
            return false;
        }
    }
    true
}

/// Sort a private copy of `seq` with `algorithm` and confirm the result is
/// an ascending permutation of `seq`.
pub fn verify_algorithm<A>(algorithm: &A, seq: &[Element]) -> Result<(), SortError>
where
    A: SortAlgorithm + ?Sized,
{
    let mut data = seq.to_vec();
    let sorted = algorithm.sort(&mut data)?;
    let mut expected = seq.to_vec();
    expected.sort();
    if *sorted != expected[..] {
        return Err(SortError::Unsorted {
            algorithm: algorithm.name().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{InsertionSort, RadixSort, all_algorithms};

    /// Deliberately broken: reverses instead of sorting
    struct Reverser;

    impl SortAlgorithm for Reverser {
        fn info(&self) -> crate::AlgorithmInfo {
            crate::AlgorithmInfo {
                name: "reverser",
                worst_case: "O(N)",
                extra_space: "O(1)",
                stable: false,
            }
        }

        fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
            seq.reverse();
            Ok(seq)
        }
    }

    /// Deliberately broken: overwrites everything with the first element
    struct Flattener;

    impl SortAlgorithm for Flattener {
        fn info(&self) -> crate::AlgorithmInfo {
            crate::AlgorithmInfo {
                name: "flattener",
                worst_case: "O(N)",
                extra_space: "O(1)",
                stable: false,
            }
        }

        fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
            if let Some(&first) = seq.first() {
                seq.fill(first);
            }
            Ok(seq)
        }
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i64>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2, 3, 3]));
        assert!(!is_sorted(&[1, 3, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_is_sorted_does_not_mutate() {
        let data = vec![3, 2, 1];
        assert!(!is_sorted(&data));
        assert_eq!(data, vec![3, 2, 1]);
    }

    #[test]
    fn test_verify_passes_for_registry() {
        let input: Vec<Element> = (0..300).map(|i| (i * 37) % 101).collect();
        for alg in all_algorithms() {
            verify_algorithm(*alg, &input).unwrap();
        }
    }

    #[test]
    fn test_verify_leaves_input_alone() {
        let input = vec![5, 4, 3];
        verify_algorithm(&InsertionSort, &input).unwrap();
        assert_eq!(input, vec![5, 4, 3]);
    }

    #[test]
    fn test_verify_catches_broken_algorithm() {
        let err = verify_algorithm(&Reverser, &[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            SortError::Unsorted {
                algorithm: "reverser".to_string()
            }
        );
    }

    #[test]
    fn test_verify_catches_lost_elements() {
        // Constant output is ascending and keeps the length
        let err = verify_algorithm(&Flattener, &[3, 1, 2]).unwrap_err();
        assert_eq!(
            err,
            SortError::Unsorted {
                algorithm: "flattener".to_string()
            }
        );
        verify_algorithm(&Flattener, &[4, 4, 4]).unwrap();
    }

    #[test]
    fn test_verify_propagates_sort_error() {
        let err = verify_algorithm(&RadixSort, &[1, -1]).unwrap_err();
        assert!(matches!(err, SortError::InvalidInput { index: 1, .. }));
    }
}
