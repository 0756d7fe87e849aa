//! Machine number implementations: `f64` as an (approximate) field and
//! `i64` as an ordered ring.

use crate::traits::{Field, OrderedRing, Ring};

impl Ring for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_one(&self) -> bool {
        *self == 1.0
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_usize(n: usize) -> Self {
        n as f64
    }

    fn pow(&self, n: u32) -> Self {
        self.powi(i32::try_from(n).unwrap_or(i32::MAX))
    }
}

impl Field for f64 {
    fn inv(&self) -> Option<Self> {
        if *self == 0.0 {
            None
        } else {
            Some(1.0 / self)
        }
    }

    fn checked_div(&self, other: &Self) -> Option<Self> {
        if *other == 0.0 {
            None
        } else {
            Some(self / other)
        }
    }
}

impl OrderedRing for f64 {
    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn signum(&self) -> i8 {
        if *self > 0.0 {
            1
        } else if *self < 0.0 {
            -1
        } else {
            0
        }
    }
}

impl Ring for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_one(&self) -> bool {
        *self == 1
    }

    #[allow(clippy::cast_possible_wrap)]
    fn from_usize(n: usize) -> Self {
        n as i64
    }
}

impl OrderedRing for i64 {
    fn abs(&self) -> Self {
        i64::abs(*self)
    }

    fn signum(&self) -> i8 {
        match self.cmp(&0) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
        }
    }
}
