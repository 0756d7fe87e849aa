//! # rivulet-rings
//!
//! Coefficient arithmetic for rivulet streams and power series.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`, `OrderedRing`
//! - Machine implementations for `f64` and `i64`
//! - Arbitrary precision integers `Z` and rationals `Q` (backed by `dashu`)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── Field
//!  └── OrderedRing
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod floats;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, OrderedRing, Ring};
