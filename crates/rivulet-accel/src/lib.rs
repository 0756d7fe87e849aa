//! # rivulet-accel
//!
//! Convergence acceleration for slowly converging streams.
//!
//! This crate provides:
//! - [`euler_transform`]: Euler's transform for alternating series
//! - [`make_tableau`] and [`accelerated_sequence`]: repeated application of
//!   a transform, taking the first term of each row
//! - [`stream_limit`]: reading a stream until consecutive terms agree
//! - Classic convergent streams (square roots, π, ln 2)
//! - Euler-method integration of streams and a stream ODE solver
//!
//! # Example
//!
//! ```
//! use rivulet_accel::{accelerated_sequence, euler_transform, pi_stream};
//!
//! let fast = accelerated_sequence(euler_transform, &pi_stream());
//! let pi = fast.nth(8).unwrap();
//! assert!((pi - std::f64::consts::PI).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod euler;
pub mod integral;
pub mod limit;
pub mod options;
pub mod sequences;
pub mod tableau;

#[cfg(test)]
mod proptests;

pub use error::{LimitError, LimitResult};
pub use euler::euler_transform;
pub use integral::{integral, solve};
pub use limit::{stream_limit, stream_limit_with};
pub use options::{LimitOptions, DEFAULT_MAX_TERMS, DEFAULT_TOLERANCE};
pub use sequences::{ln2_stream, ln2_summands, pi_stream, pi_summands, sqrt_improve, sqrt_stream};
pub use tableau::{accelerated_sequence, make_tableau};
