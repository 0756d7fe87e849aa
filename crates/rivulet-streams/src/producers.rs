//! Classic integer streams.
//!
//! Several of these are defined in terms of themselves through
//! [`Stream::recursive`]; each such definition only reads terms it has
//! already produced.

use rivulet_core::{Stream, StreamError};
use rivulet_rings::{Ring, Z};

use crate::merge::merge_all;
use crate::ops::{add, map, multiply, scale};

/// `k, k + 1, k + 2, ...`
#[must_use]
pub fn integers_from(k: i64) -> Stream<i64> {
    Stream::iterate(k, |n| n + 1)
}

/// `0, 1, 2, ...`
#[must_use]
pub fn integers() -> Stream<i64> {
    integers_from(0)
}

/// `value, value, value, ...`
pub fn constant<T: Clone + 'static>(value: T) -> Stream<T> {
    Stream::repeat(value)
}

/// `1, 1, 1, ...`
#[must_use]
pub fn ones() -> Stream<i64> {
    constant(1)
}

/// The Fibonacci-style sequence starting `a, b, a + b, ...`, produced by
/// carrying the last two values along.
pub fn fibonacci<R: Ring + 'static>(a: R, b: R) -> Stream<R> {
    let mut window = (a, b);
    Stream::generate(move |_| {
        let next = window.0.clone() + window.1.clone();
        let following = std::mem::replace(&mut window.1, next);
        std::mem::replace(&mut window.0, following)
    })
}

/// Fibonacci numbers defined by self-addition: `fib = 0 :: 1 :: (fib + fib.tail)`.
#[must_use]
pub fn fibonacci_adding() -> Stream<Z> {
    Stream::recursive(|fib| {
        Stream::prepend(vec![Z::zero(), Z::one()], &add(fib, &fib.tail()))
    })
}

/// `1, 2, 3, ...` defined as `s = 1 :: (ones + s)`.
#[must_use]
pub fn integers_from_ones() -> Stream<i64> {
    Stream::recursive(|s| Stream::cons(1, &add(&ones(), s)))
}

/// Powers of two defined as `s = 1 :: 2s`.
#[must_use]
pub fn doubles() -> Stream<Z> {
    Stream::recursive(|s| Stream::cons(Z::one(), &scale(s, Z::new(2))))
}

/// `0!, 1!, 2!, ...` defined as `f = 1 :: (f * [1, 2, 3, ...])`.
#[must_use]
pub fn factorials() -> Stream<Z> {
    Stream::recursive(|f| {
        let naturals = map(&integers_from(1), Z::new);
        Stream::cons(Z::one(), &multiply(f, &naturals))
    })
}

/// Numbers with no prime factors other than 2, 3 and 5, in increasing order.
///
/// Defined as `h = 1 :: merge(2h, 3h, 5h)`.
#[must_use]
pub fn hamming() -> Stream<i64> {
    Stream::recursive(|h| {
        Stream::cons(1, &merge_all(&[scale(h, 2), scale(h, 3), scale(h, 5)]))
    })
}

/// The values of `stream` not divisible by any earlier kept value.
///
/// Values below 2 are skipped: zero cannot divide anything and one would
/// divide everything. Each candidate is checked against the kept values in
/// a loop, rather than stacking one filter stream per kept value.
pub fn sieve(stream: &Stream<i64>) -> Stream<i64> {
    let mut source = stream.copy();
    let mut kept: Vec<i64> = Vec::new();
    Stream::from_fn(move |_| {
        while let Some(candidate) = source.pull()? {
            if candidate < 2 {
                continue;
            }
            if kept.iter().all(|&p| candidate % p != 0) {
                kept.push(candidate);
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    })
}

/// The primes, by sieving `2, 3, 4, ...`.
#[must_use]
pub fn eratosthenes_sieve() -> Stream<i64> {
    sieve(&integers_from(2))
}

/// Digits of `numerator / denominator` in base `radix`, starting after the
/// radix point for a proper fraction.
///
/// A zero denominator fails on first read with
/// [`StreamError::DivisionByZero`].
#[must_use]
pub fn expand(numerator: i64, denominator: i64, radix: i64) -> Stream<i64> {
    let mut remainder = numerator;
    Stream::from_fn(move |_| {
        if denominator == 0 {
            return Err(StreamError::DivisionByZero);
        }
        let (digit, rest) = floor_div_rem(remainder * radix, denominator);
        remainder = rest;
        Ok(Some(digit))
    })
}

/// Division rounding towards negative infinity, remainder taking the sign
/// of the divisor.
fn floor_div_rem(a: i64, b: i64) -> (i64, i64) {
    let (mut quotient, mut remainder) = (a / b, a % b);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        quotient -= 1;
        remainder += b;
    }
    (quotient, remainder)
}
