//! # rivulet-core
//!
//! The lazy-evaluation substrate of rivulet.
//!
//! This crate provides:
//! - [`MemoizedSequence`]: an append-only cache in front of an ordered,
//!   stateful producer, evaluated on demand
//! - [`Stream`]: a cheap cursor over a shared sequence; cursors never
//!   disturb each other
//! - [`Deferred`]: two-phase construction for self-referential and mutually
//!   recursive definitions
//!
//! ## Guarded recursion
//!
//! A stream may be defined in terms of itself as long as producing term `n`
//! only reads terms strictly before `n`:
//!
//! ```
//! use rivulet_core::Stream;
//!
//! // 1, 2, 4, 8, ...
//! let doubles = Stream::recursive(|this| {
//!     let mut previous = this.clone();
//!     Stream::cons(1u64, &Stream::from_fn(move |_| Ok(previous.pull()?.map(|v: u64| v * 2))))
//! });
//! assert_eq!(doubles.nth(10).unwrap(), 1024);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod deferred;
pub mod error;
pub mod memo;
pub mod stream;

pub use deferred::Deferred;
pub use error::{StreamError, StreamResult};
pub use memo::{MemoizedSequence, Producer};
pub use stream::{Stream, Values};
