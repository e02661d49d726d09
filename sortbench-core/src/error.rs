//! Error types for sorting and measurement

use thiserror::Error;

/// Errors that can occur while sorting or timing a sort
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Radix sort only accepts non-negative integers
    #[error("invalid input at index {index}: {value} is negative, radix sort requires non-negative integers")]
    InvalidInput {
        /// Position of the first offending element
        index: usize,
        /// The offending value
        value: i64,
    },

    /// An average over zero trials is undefined
    #[error("trial count must be at least 1")]
    ZeroTrials,

    /// An algorithm produced output that is not an ascending permutation of its input
    #[error("algorithm '{algorithm}' produced output that is not a sorted permutation of its input")]
    Unsorted {
        /// Identifier of the failing algorithm
        algorithm: String,
    },
}
