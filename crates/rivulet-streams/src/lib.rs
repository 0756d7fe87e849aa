//! # rivulet-streams
//!
//! The stream algebra of rivulet.
//!
//! This crate provides:
//! - Elementwise operators: add, subtract, negate, scale, multiply, divide,
//!   map, zip
//! - Ordered merging of sorted streams
//! - Running folds and interleaving
//! - Enumeration of pairs and triples of infinite streams
//! - Classic integer streams: counters, Fibonacci, factorials, Hamming
//!   numbers, primes, radix expansion
//!
//! Every operator takes its operands by reference and snapshots their
//! cursors: term 0 of the result corresponds to each operand's current
//! position, and the operands themselves are never advanced.
//!
//! ```
//! use rivulet_streams::{add, integers_from, ones};
//!
//! let s = add(&integers_from(10), &ones());
//! assert_eq!(s.prefix(3).unwrap(), vec![11, 12, 13]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combinators;
pub mod merge;
pub mod ops;
pub mod pairs;
pub mod producers;

#[cfg(test)]
mod proptests;

pub use combinators::{interleave, partial_sums, scan};
pub use merge::{merge, merge_all};
pub use ops::{
    add, divide, filter, map, multiply, negate, scale, subtract, sum_all, try_map, try_zip_with,
    zip_with,
};
pub use pairs::{all_pairs, pairs, triples};
pub use producers::{
    constant, doubles, eratosthenes_sieve, expand, factorials, fibonacci, fibonacci_adding,
    hamming, integers, integers_from, integers_from_ones, ones, sieve,
};
