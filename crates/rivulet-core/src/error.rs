//! Error type shared by every stream operation.

use thiserror::Error;

/// Result alias for stream evaluation.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors raised while evaluating a stream.
///
/// Every failure is deterministic: asking a sequence for the same index again
/// reports the same error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A finite producer ran out before reaching the requested index.
    ///
    /// This is the normal termination signal of deliberately finite streams.
    #[error("stream exhausted before index {index}")]
    Exhausted {
        /// The index that could not be produced.
        index: usize,
    },

    /// A self-referential definition asked for a term it is still producing.
    #[error("index {index} requested while the sequence is still producing it (unguarded recursion)")]
    UnguardedRecursion {
        /// The index that was requested reentrantly.
        index: usize,
    },

    /// A deferred stream was read before its definition was bound.
    #[error("deferred stream read before its definition was bound")]
    Unbound,

    /// A self-reference outlived the stream it refers to.
    #[error("self-referential view outlived the stream it refers to")]
    Detached,

    /// Division by zero, e.g. inverting a series with zero constant term.
    #[error("division by zero")]
    DivisionByZero,
}

impl StreamError {
    /// Returns true for the normal end-of-data signal of finite streams.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, StreamError::Exhausted { .. })
    }
}
