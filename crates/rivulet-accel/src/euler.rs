//! Euler's sequence transform.

use rivulet_core::{Stream, StreamError};
use rivulet_rings::Field;

/// Euler's transform of a sequence of partial sums.
///
/// Term `i` is `s₂ - (s₂ - s₁)² / (s₀ - 2s₁ + s₂)` over the window
/// `s[i], s[i+1], s[i+2]`. It converges much faster than `s` when `s` comes
/// from an alternating series.
///
/// An exactly zero denominator yields [`StreamError::DivisionByZero`] at that
/// term. The result ends two terms before a finite `s` does.
pub fn euler_transform<F: Field + 'static>(s: &Stream<F>) -> Stream<F> {
    let source = s.copy();
    let two = F::one() + F::one();

    Stream::from_fn(move |i| {
        let (Some(s0), Some(s1), Some(s2)) =
            (source.try_at(i)?, source.try_at(i + 1)?, source.try_at(i + 2)?)
        else {
            return Ok(None);
        };

        let step = s2.clone() - s1.clone();
        let curvature = s0 - two.clone() * s1 + s2.clone();
        let correction = (step.clone() * step)
            .checked_div(&curvature)
            .ok_or(StreamError::DivisionByZero)?;
        Ok(Some(s2 - correction))
    })
}
