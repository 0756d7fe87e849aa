//! Evaluating a power series at a point.

use rivulet_core::{Stream, StreamResult};
use rivulet_streams::{multiply, partial_sums};

use crate::power_series::{PowerSeries, SeriesCoeff};

impl<R: SeriesCoeff> PowerSeries<R> {
    /// The partial sums `Σ_{i<=n} a_i x^i` for n = 0, 1, 2, ...
    ///
    /// The result is an ordinary stream, so it can be handed directly to the
    /// sequence accelerators.
    #[must_use]
    pub fn partial_sums_at(&self, x: R) -> Stream<R> {
        let powers = Stream::iterate(R::one(), move |p| p.clone() * x.clone());
        partial_sums(&multiply(&self.coefficients(), &powers))
    }

    /// Sums the first `terms` terms of the series at `x`.
    ///
    /// Zero terms sum to zero.
    ///
    /// # Errors
    ///
    /// Propagates the coefficient stream's evaluation errors.
    pub fn evaluate(&self, x: R, terms: usize) -> StreamResult<R> {
        match terms {
            0 => Ok(R::zero()),
            n => self.partial_sums_at(x).nth(n - 1),
        }
    }
}
