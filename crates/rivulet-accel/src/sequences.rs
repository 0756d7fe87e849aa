//! Classic convergent streams used to exercise the accelerators.

use rivulet_core::Stream;
use rivulet_streams::{map, partial_sums, scale};

/// One Newton step towards √x from `guess`.
#[must_use]
pub fn sqrt_improve(guess: f64, x: f64) -> f64 {
    (guess + x / guess) / 2.0
}

/// Newton's iteration for √x from the guess 1, defined as
/// `guesses = 1 :: map(improve, guesses)`.
#[must_use]
pub fn sqrt_stream(x: f64) -> Stream<f64> {
    Stream::recursive(|guesses| {
        Stream::cons(1.0, &map(guesses, move |guess| sqrt_improve(guess, x)))
    })
}

/// `1/n, -1/(n+2), 1/(n+4), ...`
#[must_use]
pub fn pi_summands(n: f64) -> Stream<f64> {
    alternating_reciprocals(n, 2.0)
}

/// Partial sums of the Leibniz series, `4 (1 - 1/3 + 1/5 - ...)`.
#[must_use]
pub fn pi_stream() -> Stream<f64> {
    scale(&partial_sums(&pi_summands(1.0)), 4.0)
}

/// `1/n, -1/(n+1), 1/(n+2), ...`
#[must_use]
pub fn ln2_summands(n: f64) -> Stream<f64> {
    alternating_reciprocals(n, 1.0)
}

/// Partial sums of `1 - 1/2 + 1/3 - ...`, converging to ln 2.
#[must_use]
pub fn ln2_stream() -> Stream<f64> {
    partial_sums(&ln2_summands(1.0))
}

fn alternating_reciprocals(start: f64, step: f64) -> Stream<f64> {
    let mut denominator = start;
    let mut sign = 1.0;
    Stream::generate(move |_| {
        let term = sign * (1.0 / denominator);
        denominator += step;
        sign = -sign;
        term
    })
}
