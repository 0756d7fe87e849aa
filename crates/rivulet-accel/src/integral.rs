//! Euler-method integration of streams.
//!
//! A stream here samples a function at `t = 0, dt, 2dt, ...`. Integration and
//! the solver are self-referential stream definitions, so the state at step
//! `n + 1` is computed from cached state at step `n`.

use rivulet_core::{Deferred, Stream};
use rivulet_rings::Ring;
use rivulet_streams::{add, map, scale};

/// The running integral `y[0] = initial`, `y[n+1] = y[n] + dt * integrand[n]`.
pub fn integral<R: Ring + 'static>(integrand: &Stream<R>, initial: R, dt: R) -> Stream<R> {
    Stream::recursive(|y| Stream::cons(initial, &add(&scale(integrand, dt), y)))
}

/// Solves `dy/dt = f(y)`, `y(0) = initial`, with step `dt`.
///
/// `y` is the integral of `dy` and `dy` is `f` applied to `y`; the two are
/// tied together through a [`Deferred`] handle on `y`.
pub fn solve<R, F>(f: F, initial: R, dt: R) -> Stream<R>
where
    R: Ring + 'static,
    F: FnMut(R) -> R + 'static,
{
    let y = Deferred::new();
    let dy = map(&y.stream(), f);
    let definition = integral(&dy, initial, dt);
    y.bind(definition)
}
