//! Exact rational coefficients.
//!
//! Exact coefficients make series identities checkable with `==`: the
//! Pythagorean identity on tan/sec or `A * A⁻¹ = 1` hold term by term with
//! no rounding.

use dashu::base::{Abs, Inverse, Signed as DashuSigned};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{Field, OrderedRing, Ring};

/// An arbitrary precision rational number, always in lowest terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(pub RBig);

impl Q {
    /// `num / den`, reduced, with the sign carried by the numerator.
    ///
    /// # Panics
    ///
    /// When `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let numerator = if den < 0 {
            -IBig::from(num)
        } else {
            IBig::from(num)
        };
        Self(RBig::from_parts(numerator, UBig::from(den.unsigned_abs())))
    }

    /// `n / 1`
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator, if it fits in an i64.
    #[must_use]
    pub fn numerator_i64(&self) -> Option<i64> {
        self.0.numerator().clone().try_into().ok()
    }

    /// Returns the denominator, if it fits in an i64.
    #[must_use]
    pub fn denominator_i64(&self) -> Option<i64> {
        IBig::from(self.0.denominator().clone()).try_into().ok()
    }

    /// Unwraps the underlying `dashu` rational.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }

    fn from_usize(n: usize) -> Self {
        Self(RBig::from(IBig::from(n)))
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if Ring::is_zero(self) {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    fn signum(&self) -> i8 {
        if Ring::is_zero(self) {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }
}

impl Zero for Q {
    fn zero() -> Self {
        <Self as Ring>::zero()
    }

    fn is_zero(&self) -> bool {
        <Self as Ring>::is_zero(self)
    }
}

impl One for Q {
    fn one() -> Self {
        <Self as Ring>::one()
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({})", self.0)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        // 2/3 + 3/4 = 17/12
        let sum = a.clone() + b.clone();
        assert_eq!(sum.numerator_i64(), Some(17));
        assert_eq!(sum.denominator_i64(), Some(12));

        // 2/3 * 3/4 = 1/2
        let prod = a * b;
        assert_eq!(prod, Q::new(1, 2));
    }

    #[test]
    fn test_negative_denominator() {
        let a = Q::new(1, -2);
        assert_eq!(a, Q::new(-1, 2));
        assert_eq!(a.signum(), -1);
        assert_eq!(a.abs(), Q::new(1, 2));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = a.inv().unwrap();
        assert!(Ring::is_one(&(a * inv)));
        assert_eq!(<Q as Ring>::zero().inv(), None);
    }

    #[test]
    fn test_division() {
        // (1/2) / (1/3) = 3/2
        let quot = Q::new(1, 2).checked_div(&Q::new(1, 3)).unwrap();
        assert_eq!(quot, Q::new(3, 2));
        assert_eq!(Q::new(1, 2).checked_div(&<Q as Ring>::zero()), None);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(Q::from_usize(7), Q::new(14, 2));
    }
}
