//! Reading a stream until it settles.

use rivulet_core::Stream;
use rivulet_rings::OrderedRing;
use tracing::debug;

use crate::error::{LimitError, LimitResult};
use crate::options::LimitOptions;

/// The first term of `s` that lies within `tolerance` of the term before it.
///
/// Uses the default term cap; see [`stream_limit_with`].
///
/// # Errors
///
/// See [`stream_limit_with`].
pub fn stream_limit<T: OrderedRing + 'static>(s: &Stream<T>, tolerance: T) -> LimitResult<T> {
    stream_limit_with(s, &LimitOptions::new(tolerance))
}

/// The first term of `s` that lies within `options.tolerance` of the term
/// before it.
///
/// Terms are read from `s`'s cursor; `s` itself does not move. At least two
/// terms are read before any comparison is made.
///
/// # Errors
///
/// - [`LimitError::InvalidTolerance`] / [`LimitError::InvalidMaxTerms`] for
///   bad options
/// - [`LimitError::NotConverged`] if the cap is reached or `s` ends first
/// - [`LimitError::Stream`] if reading `s` fails
pub fn stream_limit_with<T: OrderedRing + 'static>(
    s: &Stream<T>,
    options: &LimitOptions<T>,
) -> LimitResult<T> {
    options.validate()?;

    let mut cursor = s.copy();
    let mut terms = 0usize;
    loop {
        if options.max_terms.is_some_and(|cap| terms >= cap) {
            debug!(terms, "stream limit gave up at the term cap");
            return Err(LimitError::NotConverged { terms });
        }
        if cursor.pull()?.is_none() {
            debug!(terms, "stream ended before converging");
            return Err(LimitError::NotConverged { terms });
        }
        terms += 1;
        if terms < 2 {
            continue;
        }

        let latest = cursor.latest()?;
        let gap = (latest.clone() - cursor.second_latest()?).abs();
        if gap < options.tolerance {
            debug!(terms, "stream limit converged");
            return Ok(latest);
        }
    }
}
