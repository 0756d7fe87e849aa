//! Property-based tests for power series arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::PowerSeries;
    use rivulet_rings::Q;

    fn small_coeffs() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-20i64..20i64, 1..8)
    }

    fn to_q(values: &[i64]) -> Vec<Q> {
        values.iter().map(|&v| Q::from(v)).collect()
    }

    fn coeff_at(values: &[i64], i: usize) -> i64 {
        values.get(i).copied().unwrap_or(0)
    }

    proptest! {
        #[test]
        fn mul_is_convolution(a in small_coeffs(), b in small_coeffs()) {
            let product = PowerSeries::from_coeffs(a.clone()).mul(&PowerSeries::from_coeffs(b.clone()));
            for n in 0..(a.len() + b.len()) {
                let expected: i64 = (0..=n).map(|i| coeff_at(&a, i) * coeff_at(&b, n - i)).sum();
                prop_assert_eq!(product.coeff(n).unwrap(), expected);
            }
        }

        #[test]
        fn mul_is_commutative(a in small_coeffs(), b in small_coeffs()) {
            let fa = PowerSeries::from_coeffs(a);
            let fb = PowerSeries::from_coeffs(b);
            prop_assert_eq!(fa.mul(&fb).coeffs(12).unwrap(), fb.mul(&fa).coeffs(12).unwrap());
        }

        #[test]
        fn invert_is_right_inverse(head in prop_oneof![(-9i64..=-1), (1i64..=9)], tail in small_coeffs()) {
            let mut coeffs = vec![head];
            coeffs.extend(tail);
            let a = PowerSeries::from_coeffs(to_q(&coeffs));
            let product = a.mul(&a.invert().unwrap());

            let mut expected = to_q(&[1]);
            expected.resize(10, Q::from(0));
            prop_assert_eq!(product.coeffs(10).unwrap(), expected);
        }

        #[test]
        fn derivative_is_linear(a in small_coeffs(), b in small_coeffs(), c in -5i64..5) {
            let fa = PowerSeries::from_coeffs(a);
            let fb = PowerSeries::from_coeffs(b);
            let left = fa.scale(c).add(&fb).derivative();
            let right = fa.derivative().scale(c).add(&fb.derivative());
            prop_assert_eq!(left.coeffs(10).unwrap(), right.coeffs(10).unwrap());
        }
    }
}
