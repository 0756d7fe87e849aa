//! Options for [`crate::stream_limit_with`].

use std::cmp::Ordering;

use rivulet_rings::OrderedRing;

use crate::error::{LimitError, LimitResult};

/// Tolerance used by `LimitOptions::default()`.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Term cap used unless overridden.
pub const DEFAULT_MAX_TERMS: usize = 10_000;

/// Stopping rule for a limit search.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitOptions<T> {
    /// Stop once two consecutive terms are closer than this.
    pub tolerance: T,
    /// Give up after reading this many terms. `None` reads until convergence.
    pub max_terms: Option<usize>,
}

impl<T> LimitOptions<T> {
    /// Options with the given tolerance and the default term cap.
    pub fn new(tolerance: T) -> Self {
        Self {
            tolerance,
            max_terms: Some(DEFAULT_MAX_TERMS),
        }
    }

    /// Sets the term cap.
    #[must_use]
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = Some(max_terms);
        self
    }

    /// Removes the term cap.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_terms = None;
        self
    }
}

impl<T: OrderedRing> LimitOptions<T> {
    /// Checks that the tolerance is positive and the cap allows a comparison.
    ///
    /// # Errors
    ///
    /// [`LimitError::InvalidTolerance`] or [`LimitError::InvalidMaxTerms`].
    pub fn validate(&self) -> LimitResult<()> {
        if self.tolerance.partial_cmp(&T::zero()) != Some(Ordering::Greater) {
            return Err(LimitError::InvalidTolerance(format!("{:?}", self.tolerance)));
        }
        if matches!(self.max_terms, Some(cap) if cap < 2) {
            return Err(LimitError::InvalidMaxTerms);
        }
        Ok(())
    }
}

impl Default for LimitOptions<f64> {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}
