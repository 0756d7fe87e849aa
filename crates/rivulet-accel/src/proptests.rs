//! Property-based tests for the accelerators.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rivulet_core::Stream;
    use rivulet_rings::{Field, Ring, Q};
    use rivulet_streams::partial_sums;

    use crate::{euler_transform, sqrt_stream, stream_limit};

    fn ratio() -> impl Strategy<Value = Q> {
        (prop_oneof![(-9i64..=-1), (1i64..=9)], 2i64..=10)
            .prop_filter("ratio 1 has no limit", |(n, d)| n != d)
            .prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn euler_is_exact_on_geometric_series(r in ratio()) {
            // Partial sums of Σ r^i; the transform recovers 1/(1-r) exactly
            let powers = Stream::iterate(Q::one(), {
                let r = r.clone();
                move |p| p.clone() * r.clone()
            });
            let sums = partial_sums(&powers);
            let limit = (Q::one() - r).inv().unwrap();

            let transformed = euler_transform(&sums);
            for i in 0..5 {
                prop_assert_eq!(transformed.nth(i).unwrap(), limit.clone());
            }
        }

        #[test]
        fn limit_of_eventually_constant_stream(steps in prop::collection::vec(1i64..50, 0..10), value in -100i64..100) {
            // Consecutive prefix terms differ by at least 1, then the stream settles
            let mut values: Vec<f64> = Vec::new();
            let mut current = -1000i64;
            for step in steps {
                current += step;
                values.push(current as f64);
            }
            values.extend([value as f64; 2]);

            let found = stream_limit(&Stream::from_vec(values), 1e-3).unwrap();
            prop_assert_eq!(found, value as f64);
        }

        #[test]
        fn stream_limit_stays_within_tolerance_of_sqrt(x in 0.5f64..1000.0) {
            let root = stream_limit(&sqrt_stream(x), 1e-9).unwrap();
            prop_assert!((root * root - x).abs() < 1e-6 * x.max(1.0));
        }
    }
}
