//! The power series type and its constructors.

use std::fmt;

use rivulet_core::{Stream, StreamResult};
use rivulet_rings::Ring;

/// Trait alias for types usable as power series coefficients.
pub trait SeriesCoeff: Ring + 'static {}

impl<T: Ring + 'static> SeriesCoeff for T {}

/// A formal power series `a_0 + a_1 x + a_2 x² + ...`.
///
/// The coefficients live in a lazily evaluated, memoized stream; coefficient
/// `n` is computed the first time it is asked for and cached from then on.
/// Series are never mutated: every operation returns a new series sharing
/// the operands' coefficient caches.
#[derive(Clone)]
pub struct PowerSeries<R> {
    coefficients: Stream<R>,
}

impl<R: SeriesCoeff> PowerSeries<R> {
    /// Wraps a coefficient stream. Coefficient 0 is the stream's current
    /// cursor value.
    #[must_use]
    pub fn from_stream(coefficients: Stream<R>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial: the given coefficients followed by zeros.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<R>) -> Self {
        let mut finite = coeffs.into_iter();
        Self::from_stream(Stream::generate(move |_| finite.next().unwrap_or_else(R::zero)))
    }

    /// The constant series `c`.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::from_coeffs(vec![c])
    }

    /// The zero series.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_stream(Stream::repeat(R::zero()))
    }

    /// The series `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// The series `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1)
    }

    /// The series `x^n`.
    #[must_use]
    pub fn monomial(n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = R::one();
        Self::from_coeffs(coeffs)
    }

    /// The series `S` satisfying `S = define(S)`.
    ///
    /// `define` receives a view of the series being defined. Coefficient `n`
    /// of the definition may only depend on coefficients before `n` of the
    /// view, which holds whenever the view is used under an integration or
    /// after a prepended constant term.
    pub fn fixed_point<F>(define: F) -> Self
    where
        F: FnOnce(&PowerSeries<R>) -> PowerSeries<R>,
    {
        Self::from_stream(Stream::recursive(|this| {
            define(&PowerSeries::from_stream(this.clone())).into_stream()
        }))
    }

    /// The coefficient of `x^n`.
    ///
    /// # Errors
    ///
    /// Propagates the coefficient stream's evaluation errors.
    pub fn coeff(&self, n: usize) -> StreamResult<R> {
        self.coefficients.at(n)
    }

    /// The first `n` coefficients.
    ///
    /// # Errors
    ///
    /// Propagates the coefficient stream's evaluation errors.
    pub fn coeffs(&self, n: usize) -> StreamResult<Vec<R>> {
        self.coefficients.prefix(n)
    }

    /// A fresh cursor over the coefficients, starting at `a_0`.
    #[must_use]
    pub fn coefficients(&self) -> Stream<R> {
        self.coefficients.copy()
    }

    /// Unwraps the coefficient stream.
    #[must_use]
    pub fn into_stream(self) -> Stream<R> {
        self.coefficients
    }
}

impl<R> fmt::Debug for PowerSeries<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowerSeries")
            .field("coefficients", &self.coefficients)
            .finish()
    }
}
