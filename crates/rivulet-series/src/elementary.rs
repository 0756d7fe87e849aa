//! Elementary power series at the origin.
//!
//! `exp`, `sin` and `cos` are fixed points of the integral equations they
//! satisfy, so each coefficient is computed from earlier ones of the same
//! series rather than from a closed form.

use rivulet_core::{Stream, StreamResult};
use rivulet_rings::Field;

use crate::power_series::{PowerSeries, SeriesCoeff};

impl<R: SeriesCoeff + Field> PowerSeries<R> {
    /// exp(x), the solution of `f = 1 + ∫f`.
    #[must_use]
    pub fn exp() -> Self {
        Self::fixed_point(|exp| exp.integrate(R::one()))
    }

    /// sin(x), the solution of `f = ∫(1 + ∫-f)`.
    #[must_use]
    pub fn sin() -> Self {
        Self::fixed_point(|sin| sin.neg().integrate(R::one()).integrate(R::zero()))
    }

    /// cos(x), the solution of `f = 1 + ∫∫-f`.
    #[must_use]
    pub fn cos() -> Self {
        Self::fixed_point(|cos| cos.neg().integrate(R::zero()).integrate(R::one()))
    }

    /// tan(x) = sin(x) / cos(x).
    ///
    /// # Errors
    ///
    /// Propagates errors from evaluating the constant term of cos.
    pub fn tan() -> StreamResult<Self> {
        Self::sin().div(&Self::cos())
    }

    /// sec(x) = 1 / cos(x).
    ///
    /// # Errors
    ///
    /// Propagates errors from evaluating the constant term of cos.
    pub fn sec() -> StreamResult<Self> {
        Self::cos().invert()
    }

    /// 1/(1-x) = 1 + x + x² + ...
    #[must_use]
    pub fn geometric() -> Self {
        Self::from_stream(Stream::repeat(R::one()))
    }

    /// log(1+x) = ∫ 1/(1+x)
    #[must_use]
    pub fn log1p() -> Self {
        let alternating = Stream::generate(|i| if i % 2 == 0 { R::one() } else { -R::one() });
        Self::from_stream(alternating).integral()
    }

    /// atan(x) = ∫ 1/(1+x²)
    #[must_use]
    pub fn atan() -> Self {
        let even_alternating = Stream::generate(|i| match i % 4 {
            0 => R::one(),
            2 => -R::one(),
            _ => R::zero(),
        });
        Self::from_stream(even_alternating).integral()
    }
}
