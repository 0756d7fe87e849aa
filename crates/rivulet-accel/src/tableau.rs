//! Repeated acceleration.
//!
//! The tableau of a transform `T` over `s` is the stream of streams
//! `s, T(s), T(T(s)), ...`. Taking the first term of every row gives a
//! sequence that often converges dramatically faster than any single row.

use rivulet_core::Stream;
use rivulet_streams::try_map;
use tracing::trace;

/// The stream of rows `s, transform(s), transform(transform(s)), ...`.
///
/// Rows are built on demand; row `k` exists only once something reads it.
pub fn make_tableau<F, T>(mut transform: T, s: &Stream<F>) -> Stream<Stream<F>>
where
    F: Clone + 'static,
    T: FnMut(&Stream<F>) -> Stream<F> + 'static,
{
    let mut row = 0usize;
    Stream::iterate(s.copy(), move |previous| {
        row += 1;
        trace!(row, "building tableau row");
        transform(previous)
    })
}

/// The first term of each tableau row.
///
/// Reading term `k` evaluates the first `2k + 1` terms of `s` for a
/// three-term transform such as [`crate::euler_transform`].
pub fn accelerated_sequence<F, T>(transform: T, s: &Stream<F>) -> Stream<F>
where
    F: Clone + 'static,
    T: FnMut(&Stream<F>) -> Stream<F> + 'static,
{
    try_map(&make_tableau(transform, s), |row: Stream<F>| row.peek())
}
