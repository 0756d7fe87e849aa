//! Coefficient traits shared by streams, series and acceleration.
//!
//! Streams only need `Clone`; everything that does arithmetic on stream
//! elements (power series, acceleration, the numeric producers) is written
//! against these traits so the same definition runs over floats and over
//! exact rationals.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Values that can be added, subtracted and multiplied.
///
/// # Laws
///
/// `+` is an abelian group with neutral `zero()`, `*` is an associative
/// monoid with neutral `one()`, and `*` distributes over `+`.
///
/// Floating-point implementations satisfy these laws only approximately.
pub trait Ring:
    Clone
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// `0`
    fn zero() -> Self;

    /// `1`
    fn one() -> Self;

    /// `self == 0`
    fn is_zero(&self) -> bool;

    /// `self == 1`
    fn is_one(&self) -> bool;

    /// Embeds the natural number `n` as `1 + 1 + ... + 1`.
    ///
    /// The default uses double-and-add; concrete types override it with a
    /// direct conversion.
    fn from_usize(n: usize) -> Self {
        let mut result = Self::zero();
        let mut addend = Self::one();
        let mut k = n;

        while k > 0 {
            if k & 1 == 1 {
                result = result + addend.clone();
            }
            addend = addend.clone() + addend;
            k >>= 1;
        }

        result
    }

    /// `self` multiplied by itself `n` times, by square-and-multiply.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A ring in which every nonzero value can be divided by.
pub trait Field: Ring {
    /// `1 / self`, or `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// `self / other`, or `None` when `other` is zero.
    fn checked_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inverse| self.clone() * inverse)
    }
}

/// A ring with a compatible ordering and absolute value.
pub trait OrderedRing: Ring + PartialOrd {
    /// `|self|`
    fn abs(&self) -> Self;

    /// `-1`, `0` or `1` according to the sign of `self`.
    fn signum(&self) -> i8;
}
