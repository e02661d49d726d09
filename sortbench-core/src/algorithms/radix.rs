//! LSD decimal radix sort

use super::{AlgorithmInfo, Element, SortAlgorithm};
use crate::error::SortError;

/// Number of buckets per pass (decimal digits)
const RADIX: u64 = 10;

/// LSD radix sort on decimal digits - O(k·N) where k is the digit count of
/// the largest element, O(N) extra space, stable.
///
/// Only defined for non-negative integers; negative input is rejected with
/// [`SortError::InvalidInput`] before anything is moved.
pub struct RadixSort;

impl SortAlgorithm for RadixSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: "radix_sort",
            worst_case: "O(k*N)",
            extra_space: "O(N)",
            stable: true,
        }
    }

    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
        radix_sort(seq)
    }
}

/// Sort non-negative integers by decimal digit, least significant first.
pub fn radix_sort(seq: &mut [i64]) -> Result<&mut [i64], SortError> {
    if let Some((index, &value)) = seq.iter().enumerate().find(|&(_, &v)| v < 0) {
        return Err(SortError::InvalidInput { index, value });
    }
    Ok(radix_sort_by_key(seq, |&v| v as u64))
}

/// Radix sort on an extracted `u64` key.
///
/// Each pass distributes elements into buckets `0..=9` by the current digit,
/// preserving encounter order within a bucket, then rebuilds `seq` bucket by
/// bucket. Passes stop once the largest key has no digits left.
pub fn radix_sort_by_key<T, F>(seq: &mut [T], key: F) -> &mut [T]
where
    T: Clone,
    F: Fn(&T) -> u64,
{
    let max_key = seq.iter().map(&key).max().unwrap_or(0);
    let mut buckets: [Vec<T>; RADIX as usize] = std::array::from_fn(|_| Vec::new());
    let mut divisor: u64 = 1;

    while max_key / divisor > 0 {
        for item in seq.iter() {
            let digit = ((key(item) / divisor) % RADIX) as usize;
            buckets[digit].push(item.clone());
        }

        let mut k = 0;
        for bucket in buckets.iter_mut() {
            for item in bucket.drain(..) {
                seq[k] = item;
                k += 1;
            }
        }
        debug_assert_eq!(k, seq.len(), "radix pass lost elements");

        // Past u64::MAX's 20th digit there is nothing left to look at
        match divisor.checked_mul(RADIX) {
            Some(next) => divisor = next,
            None => break,
        }
    }
    seq
}
