//! Running folds and interleaving.

use rivulet_core::Stream;
use rivulet_rings::Ring;

/// Running fold: term `n` is `f(... f(f(init, s[0]), s[1]) ..., s[n])`.
pub fn scan<T, A, F>(stream: &Stream<T>, init: A, mut f: F) -> Stream<A>
where
    T: Clone + 'static,
    A: Clone + 'static,
    F: FnMut(A, T) -> A + 'static,
{
    let mut source = stream.copy();
    let mut accumulator = init;
    Stream::from_fn(move |_| {
        let Some(value) = source.pull()? else {
            return Ok(None);
        };
        accumulator = f(accumulator.clone(), value);
        Ok(Some(accumulator.clone()))
    })
}

/// `s[0], s[0] + s[1], s[0] + s[1] + s[2], ...`
pub fn partial_sums<R: Ring + 'static>(stream: &Stream<R>) -> Stream<R> {
    scan(stream, R::zero(), |sum, value| sum + value)
}

/// `a[0], b[0], a[1], b[1], ...`
///
/// When one side ends the other continues alone, so no value of either
/// stream is ever lost.
pub fn interleave<T: Clone + 'static>(a: &Stream<T>, b: &Stream<T>) -> Stream<T> {
    let mut sides = [a.copy(), b.copy()];
    let mut turn = 0;
    Stream::from_fn(move |_| {
        let current = turn;
        turn = 1 - turn;
        match sides[current].pull()? {
            Some(value) => Ok(Some(value)),
            None => sides[1 - current].pull(),
        }
    })
}
