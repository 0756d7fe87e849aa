//! Elementwise stream operators.
//!
//! Each operator advances every operand exactly once per produced term and
//! ends as soon as any operand ends.

use rivulet_core::{Stream, StreamError, StreamResult};
use rivulet_rings::{Field, Ring};

/// Applies `f` to every value.
pub fn map<A, B, F>(stream: &Stream<A>, mut f: F) -> Stream<B>
where
    A: Clone + 'static,
    B: Clone + 'static,
    F: FnMut(A) -> B + 'static,
{
    let mut source = stream.copy();
    Stream::from_fn(move |_| Ok(source.pull()?.map(&mut f)))
}

/// Applies a fallible `f` to every value; the first error ends the stream.
pub fn try_map<A, B, F>(stream: &Stream<A>, mut f: F) -> Stream<B>
where
    A: Clone + 'static,
    B: Clone + 'static,
    F: FnMut(A) -> StreamResult<B> + 'static,
{
    let mut source = stream.copy();
    Stream::from_fn(move |_| source.pull()?.map(&mut f).transpose())
}

/// Combines two streams pairwise with `f`.
pub fn zip_with<A, B, C, F>(a: &Stream<A>, b: &Stream<B>, mut f: F) -> Stream<C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F: FnMut(A, B) -> C + 'static,
{
    try_zip_with(a, b, move |x, y| Ok(f(x, y)))
}

/// Combines two streams pairwise with a fallible `f`.
pub fn try_zip_with<A, B, C, F>(a: &Stream<A>, b: &Stream<B>, mut f: F) -> Stream<C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F: FnMut(A, B) -> StreamResult<C> + 'static,
{
    let mut left = a.copy();
    let mut right = b.copy();
    Stream::from_fn(move |_| {
        let Some(x) = left.pull()? else {
            return Ok(None);
        };
        let Some(y) = right.pull()? else {
            return Ok(None);
        };
        f(x, y).map(Some)
    })
}

/// `a[i] + b[i]`
pub fn add<R: Ring + 'static>(a: &Stream<R>, b: &Stream<R>) -> Stream<R> {
    zip_with(a, b, |x, y| x + y)
}

/// `a[i] - b[i]`
pub fn subtract<R: Ring + 'static>(a: &Stream<R>, b: &Stream<R>) -> Stream<R> {
    zip_with(a, b, |x, y| x - y)
}

/// `a[i] * b[i]`
pub fn multiply<R: Ring + 'static>(a: &Stream<R>, b: &Stream<R>) -> Stream<R> {
    zip_with(a, b, |x, y| x * y)
}

/// `a[i] / b[i]`; a zero divisor fails with [`StreamError::DivisionByZero`].
pub fn divide<F: Field + 'static>(a: &Stream<F>, b: &Stream<F>) -> Stream<F> {
    try_zip_with(a, b, |x, y| {
        x.checked_div(&y).ok_or(StreamError::DivisionByZero)
    })
}

/// `-a[i]`
pub fn negate<R: Ring + 'static>(a: &Stream<R>) -> Stream<R> {
    map(a, |x: R| -x)
}

/// `factor * a[i]`
pub fn scale<R: Ring + 'static>(a: &Stream<R>, factor: R) -> Stream<R> {
    map(a, move |x| factor.clone() * x)
}

/// Sum of any number of streams, term by term.
///
/// An empty slice yields the zero stream.
pub fn sum_all<R: Ring + 'static>(streams: &[Stream<R>]) -> Stream<R> {
    let mut cursors: Vec<Stream<R>> = streams.iter().map(Stream::copy).collect();
    Stream::from_fn(move |_| {
        let mut total = R::zero();
        for cursor in &mut cursors {
            match cursor.pull()? {
                Some(value) => total = total + value,
                None => return Ok(None),
            }
        }
        Ok(Some(total))
    })
}

/// The values satisfying `predicate`, in order.
///
/// Producing a term keeps reading the source until a match is found, so an
/// infinite source with no further matches never yields again.
pub fn filter<T, P>(stream: &Stream<T>, mut predicate: P) -> Stream<T>
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
{
    let mut source = stream.copy();
    Stream::from_fn(move |_| {
        while let Some(value) = source.pull()? {
            if predicate(&value) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producers::{integers, integers_from};
    use rivulet_rings::Q;

    #[test]
    fn test_add_subtract_multiply() {
        let a = integers_from(1);
        let b = integers_from(10);

        assert_eq!(add(&a, &b).prefix(3).unwrap(), vec![11, 13, 15]);
        assert_eq!(subtract(&b, &a).prefix(3).unwrap(), vec![9, 9, 9]);
        assert_eq!(multiply(&a, &b).prefix(3).unwrap(), vec![10, 22, 36]);
    }

    #[test]
    fn test_operands_are_snapshotted() {
        let mut a = integers();
        a.take(5).unwrap();

        let doubled = scale(&a, 2);
        // Term 0 is the operand's current cursor value
        assert_eq!(doubled.nth(0).unwrap(), 10);
        // and the operand did not move
        assert_eq!(a.position(), 5);
    }

    #[test]
    fn test_negate_and_map() {
        let a = integers_from(1);
        assert_eq!(negate(&a).prefix(3).unwrap(), vec![-1, -2, -3]);
        assert_eq!(
            map(&a, |n| format!("#{n}")).prefix(2).unwrap(),
            vec!["#1".to_string(), "#2".to_string()]
        );
    }

    #[test]
    fn test_finite_operand_ends_result() {
        let short = Stream::from_vec(vec![1i64, 2]);
        let sum = add(&short, &integers());
        assert_eq!(sum.prefix(2).unwrap(), vec![1, 3]);
        assert_eq!(sum.try_at(2).unwrap(), None);
    }

    #[test]
    fn test_divide_by_zero() {
        let num = Stream::from_vec(vec![Q::from(1), Q::from(1)]);
        let den = Stream::from_vec(vec![Q::from(4), Q::from(0)]);
        let quotient = divide(&num, &den);

        assert_eq!(quotient.nth(0).unwrap(), Q::new(1, 4));
        assert_eq!(quotient.nth(1), Err(StreamError::DivisionByZero));
    }

    #[test]
    fn test_try_map_propagates() {
        let s = try_map(&integers(), |n| {
            if n < 3 {
                Ok(n * n)
            } else {
                Err(StreamError::DivisionByZero)
            }
        });
        assert_eq!(s.prefix(3).unwrap(), vec![0, 1, 4]);
        assert!(s.nth(3).is_err());
    }

    #[test]
    fn test_sum_all() {
        let streams = [integers(), integers(), integers_from(100)];
        assert_eq!(sum_all(&streams).prefix(3).unwrap(), vec![100, 103, 106]);
        assert_eq!(sum_all::<i64>(&[]).prefix(2).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_filter() {
        let evens = filter(&integers(), |n| n % 2 == 0);
        assert_eq!(evens.prefix(4).unwrap(), vec![0, 2, 4, 6]);

        let none = filter(&Stream::from_vec(vec![1, 3, 5]), |n| n % 2 == 0);
        assert_eq!(none.try_peek().unwrap(), None);
    }
}
