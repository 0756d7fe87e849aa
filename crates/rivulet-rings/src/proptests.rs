//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::traits::{Field, Ring};
    use crate::{Q, Z};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_inverse(n in non_zero_int(), d in non_zero_int()) {
            let a = Q::new(n, d);
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_div_then_mul(n1 in small_int(), d1 in non_zero_int(), n2 in non_zero_int(), d2 in non_zero_int()) {
            let a = Q::new(n1, d1);
            let b = Q::new(n2, d2);
            let quotient = a.checked_div(&b).unwrap();
            prop_assert_eq!(quotient * b, a);
        }

        #[test]
        fn from_usize_matches_repeated_addition(n in 0usize..200) {
            let mut sum = Q::zero();
            for _ in 0..n {
                sum = sum + Q::one();
            }
            prop_assert_eq!(Q::from_usize(n), sum);
        }
    }
}
