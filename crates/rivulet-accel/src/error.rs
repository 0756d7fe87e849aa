//! Errors raised while searching for a limit.

use rivulet_core::StreamError;
use thiserror::Error;

/// Errors that can occur during limit computation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Reading the stream failed.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// The term cap was reached, or a finite stream ended, before two
    /// consecutive terms agreed.
    #[error("no convergence within {terms} terms")]
    NotConverged {
        /// Number of terms read.
        terms: usize,
    },

    /// The tolerance was not strictly positive.
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(String),

    /// The term cap was too small to compare two terms.
    #[error("term cap must allow at least two terms")]
    InvalidMaxTerms,
}

/// Result type for limit computations.
pub type LimitResult<T> = Result<T, LimitError>;
