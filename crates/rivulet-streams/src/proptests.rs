//! Property-based tests for the stream algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rivulet_core::Stream;

    use crate::{add, integers_from, interleave, merge, multiply, partial_sums, scale};

    fn small_vec() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-1000i64..1000i64, 1..40)
    }

    fn sorted_distinct() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::btree_set(-500i64..500i64, 0..30)
            .prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        #[test]
        fn integers_from_is_offset(k in -10_000i64..10_000i64, n in 0usize..500) {
            prop_assert_eq!(integers_from(k).nth(n).unwrap(), k + n as i64);
        }

        #[test]
        fn add_is_elementwise(a in small_vec(), b in small_vec()) {
            let sum = add(&Stream::from_vec(a.clone()), &Stream::from_vec(b.clone()));
            let expected: Vec<i64> = a.iter().zip(&b).map(|(x, y)| x + y).collect();
            let actual: Vec<i64> = sum.values().map(Result::unwrap).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn multiply_is_elementwise(a in small_vec(), b in small_vec()) {
            let product = multiply(&Stream::from_vec(a.clone()), &Stream::from_vec(b.clone()));
            for (i, (x, y)) in a.iter().zip(&b).enumerate() {
                prop_assert_eq!(product.nth(i).unwrap(), x * y);
            }
        }

        #[test]
        fn scale_distributes_over_add(a in small_vec(), c in -50i64..50) {
            let s = Stream::from_vec(a);
            let left = scale(&add(&s, &s), c);
            let right = add(&scale(&s, c), &scale(&s, c));
            prop_assert_eq!(left.values().collect::<Vec<_>>(), right.values().collect::<Vec<_>>());
        }

        #[test]
        fn partial_sums_are_running_totals(a in small_vec()) {
            let sums = partial_sums(&Stream::from_vec(a.clone()));
            let mut total = 0;
            for (i, x) in a.iter().enumerate() {
                total += x;
                prop_assert_eq!(sums.nth(i).unwrap(), total);
            }
        }

        #[test]
        fn merge_is_sorted_union(a in sorted_distinct(), b in sorted_distinct()) {
            let merged: Vec<i64> = merge(&Stream::from_vec(a.clone()), &Stream::from_vec(b.clone()))
                .values()
                .map(Result::unwrap)
                .collect();

            let mut expected: Vec<i64> = a.into_iter().chain(b).collect();
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(merged, expected);
        }

        #[test]
        fn interleave_preserves_every_value(a in small_vec(), b in small_vec()) {
            let mixed: Vec<i64> = interleave(&Stream::from_vec(a.clone()), &Stream::from_vec(b.clone()))
                .values()
                .map(Result::unwrap)
                .collect();

            prop_assert_eq!(mixed.len(), a.len() + b.len());
            let mut expected: Vec<i64> = a.into_iter().chain(b).collect();
            let mut actual = mixed;
            expected.sort_unstable();
            actual.sort_unstable();
            prop_assert_eq!(actual, expected);
        }
    }
}
