//! Arithmetic operations on power series.
//!
//! Provides addition, multiplication, differentiation, integration and
//! inversion. Every coefficient is computed on demand and reads only the
//! operand coefficients it needs, which keeps these operations usable inside
//! self-referential definitions.

use rivulet_core::{Stream, StreamError, StreamResult};
use rivulet_rings::Field;
use tracing::debug;

use crate::power_series::{PowerSeries, SeriesCoeff};

impl<R: SeriesCoeff> PowerSeries<R> {
    /// Adds two power series.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_stream(rivulet_streams::add(
            &self.coefficients(),
            &other.coefficients(),
        ))
    }

    /// Subtracts two power series.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_stream(rivulet_streams::subtract(
            &self.coefficients(),
            &other.coefficients(),
        ))
    }

    /// Negates a power series.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_stream(rivulet_streams::negate(&self.coefficients()))
    }

    /// Scales a power series by a constant.
    #[must_use]
    pub fn scale(&self, c: R) -> Self {
        Self::from_stream(rivulet_streams::scale(&self.coefficients(), c))
    }

    /// Sum of any number of series, term by term; an empty slice gives zero.
    #[must_use]
    pub fn sum(terms: &[Self]) -> Self {
        let streams: Vec<Stream<R>> = terms.iter().map(Self::coefficients).collect();
        Self::from_stream(rivulet_streams::sum_all(&streams))
    }

    /// Product of any number of series; an empty slice gives one.
    #[must_use]
    pub fn product(terms: &[Self]) -> Self {
        match terms.split_first() {
            Some((first, rest)) => rest.iter().fold(first.clone(), |acc, term| acc.mul(term)),
            None => Self::one(),
        }
    }

    /// Multiplies two power series (Cauchy product).
    ///
    /// (f * g)_n = Σᵢ f_i * g_{n-i}
    ///
    /// Coefficient `n` reads only coefficients `0..=n` of each factor.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let f = self.coefficients();
        let g = other.coefficients();

        Self::from_stream(Stream::from_fn(move |n| {
            let mut sum = R::zero();
            for i in 0..=n {
                let (Some(f_i), Some(g_rest)) = (f.try_at(i)?, g.try_at(n - i)?) else {
                    return Ok(None);
                };
                sum = sum + f_i * g_rest;
            }
            Ok(Some(sum))
        }))
    }

    /// Squares a power series.
    #[must_use]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Raises to an integer power.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        if exp == 0 {
            return Self::one();
        }

        let mut result = self.clone();
        for _ in 1..exp {
            result = result.mul(self);
        }
        result
    }

    /// Computes the formal derivative.
    ///
    /// (f')_n = (n+1) * f_{n+1}
    #[must_use]
    pub fn derivative(&self) -> Self {
        let f = self.coefficients();
        Self::from_stream(Stream::from_fn(move |n| {
            Ok(f.try_at(n + 1)?.map(|c| R::from_usize(n + 1) * c))
        }))
    }

    /// Inverts a series whose constant term is 1.
    ///
    /// Solves `X = 1 - x·(A_tail · X)`, i.e. `A · X = 1`, as a fixed point.
    /// The constant term of `self` is never read and is taken to be 1; use
    /// [`PowerSeries::invert`] for a general invertible series.
    #[must_use]
    pub fn invert_unit(&self) -> Self {
        let tail = Self::from_stream(self.coefficients().tail());
        Self::fixed_point(|x| {
            let correction = tail.mul(x).neg();
            Self::from_stream(Stream::cons(R::one(), &correction.into_stream()))
        })
    }
}

/// Operations that require a field (division, inversion, integration).
impl<R: SeriesCoeff + Field> PowerSeries<R> {
    /// Computes the formal integral with constant term `c`.
    ///
    /// (∫f)_0 = c, (∫f)_n = f_{n-1} / n for n > 0
    ///
    /// Coefficient `n` of the result reads only coefficient `n - 1` of
    /// `self`, so `self` may refer to the result.
    #[must_use]
    pub fn integrate(&self, c: R) -> Self {
        let f = self.coefficients();
        let shifted = Stream::from_fn(move |i| {
            let Some(coeff) = f.try_at(i)? else {
                return Ok(None);
            };
            coeff
                .checked_div(&R::from_usize(i + 1))
                .map(Some)
                .ok_or(StreamError::DivisionByZero)
        });
        Self::from_stream(Stream::cons(c, &shifted))
    }

    /// Computes the formal integral with constant term 0.
    #[must_use]
    pub fn integral(&self) -> Self {
        self.integrate(R::zero())
    }

    /// Computes the multiplicative inverse 1/f.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::DivisionByZero`] if the constant term is zero,
    /// or an error from evaluating it.
    pub fn invert(&self) -> StreamResult<Self> {
        let f0_inv = self.constant_inverse()?;
        Ok(self.scale(f0_inv.clone()).invert_unit().scale(f0_inv))
    }

    /// Divides two power series.
    ///
    /// f / g = (f / g_0) * 1/(g / g_0)
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::DivisionByZero`] if the constant term of
    /// `other` is zero, or an error from evaluating it.
    pub fn div(&self, other: &Self) -> StreamResult<Self> {
        let g0_inv = other.constant_inverse()?;
        let unit = other.scale(g0_inv.clone()).invert_unit();
        Ok(self.scale(g0_inv).mul(&unit))
    }

    fn constant_inverse(&self) -> StreamResult<R> {
        let c = self.coeff(0)?;
        c.inv().ok_or_else(|| {
            debug!(constant = ?c, "series has no inverse: zero constant term");
            StreamError::DivisionByZero
        })
    }
}
