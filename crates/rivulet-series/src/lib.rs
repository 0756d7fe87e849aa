//! # rivulet-series
//!
//! Formal power series whose coefficients are lazy, memoized streams.
//!
//! This crate provides:
//! - [`PowerSeries`]: an infinite coefficient stream with series algebra
//! - Cauchy products computed as explicit convolutions
//! - Inversion and division of series with an invertible constant term
//! - Elementary series (exp, sin, cos, tan, sec, log(1+x), atan) defined by
//!   the differential equations they satisfy
//! - Partial sums at a point, ready to be fed to sequence acceleration
//!
//! ```
//! use rivulet_rings::Q;
//! use rivulet_series::PowerSeries;
//!
//! let exp = PowerSeries::<Q>::exp();
//! assert_eq!(exp.coeff(3).unwrap(), Q::new(1, 6));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod elementary;
pub mod evaluate;
pub mod ops;
pub mod power_series;

#[cfg(test)]
mod proptests;

pub use power_series::{PowerSeries, SeriesCoeff};
