//! # sp-math
//!
//! Mathematical utilities: array and grid newtypes (over nalgebra),
//! descriptive statistics (via statrs), seeded random number generation,
//! and the occupation-number distributions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional real arrays.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability and occupation distributions.
pub mod distributions;

/// Two-dimensional real tables.
pub mod grid;

/// Random number generators.
pub mod random_numbers;

/// Statistics reductions.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::close_enough;
pub use distributions::{bose, fermi, maxwell, Occupation, OccupationSlice};
pub use grid::Grid;
pub use random_numbers::{MersenneTwisterUniformRng, StdUniformRng, UniformRng};
pub use statistics::{column_mean_std, SampleSummary};
