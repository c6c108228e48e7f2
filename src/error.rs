//! Error types for sequence randomization and the diff experiment.

use thiserror::Error;

/// Errors reported by the randomizer, the statistics helpers and the
/// experiment configuration.
///
/// # Examples
/// ```
/// use u_randomize::Error;
///
/// let err = Error::IndexOutOfBounds { index: 7, len: 5 };
/// assert_eq!(err.to_string(), "index 7 out of bounds for sequence of length 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A swap position lies outside the sequence
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Too few elements to compute a statistic
    #[error("insufficient data: need at least {needed} elements, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Experiment parameters rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid method: {0}. Must be one of: transpositions, fisher-yates")]
    InvalidMethod(String),

    #[error("invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Randomization changed the multiset of values
    #[error("randomized sequence is not a permutation of its input")]
    NotAPermutation,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
