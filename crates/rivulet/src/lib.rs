//! # Rivulet
//!
//! Lazily evaluated, memoized infinite streams, and the algebra built on
//! them.
//!
//! ## Features
//!
//! - **Memoized streams**: every term is computed once, on demand, and
//!   shared by any number of independent cursors
//! - **Self-referential definitions**: streams defined in terms of
//!   themselves evaluate without unbounded recursion
//! - **Stream algebra**: elementwise arithmetic, merging, running sums,
//!   interleaving and pair enumeration
//! - **Power series**: Cauchy products, inversion, division, integration
//!   and the elementary functions, over floats or exact rationals
//! - **Acceleration**: Euler's transform, tableaux and limit search
//!
//! ## Quick Start
//!
//! ```rust
//! use rivulet::prelude::*;
//!
//! // h = 1 :: merge(2h, 3h, 5h)
//! let hamming = streams::hamming();
//! assert_eq!(hamming.prefix(8).unwrap(), vec![1, 2, 3, 4, 5, 6, 8, 9]);
//!
//! // tan = sin / cos, exactly
//! let tan = PowerSeries::<Q>::tan().unwrap();
//! assert_eq!(tan.coeff(3).unwrap(), Q::new(1, 3));
//!
//! // Accelerate the Leibniz series for π
//! let pi = accelerated_sequence(euler_transform, &pi_stream());
//! assert!((pi.nth(8).unwrap() - std::f64::consts::PI).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use rivulet_accel as accel;
pub use rivulet_core as core;
pub use rivulet_rings as rings;
pub use rivulet_series as series;
pub use rivulet_streams as streams;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rivulet_accel::{
        accelerated_sequence, euler_transform, make_tableau, pi_stream, sqrt_stream, stream_limit,
        stream_limit_with, LimitError, LimitOptions,
    };
    pub use rivulet_core::{Deferred, Stream, StreamError, StreamResult};
    pub use rivulet_rings::{Field, OrderedRing, Ring, Q, Z};
    pub use rivulet_series::PowerSeries;
    pub use rivulet_streams as streams;
}
