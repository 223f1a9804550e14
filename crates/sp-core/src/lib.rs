//! # sp-core
//!
//! Core types, parameter defaults, and error definitions for statphys-rs.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – type aliases, the error hierarchy and the
//! parameter sets carrying the library-wide defaults.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types, validation helpers, and the `ensure_arg!` macro.
pub mod errors;

/// Parameter sets (`DistributionParams`, `CircleParams`) and their defaults.
pub mod params;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for sample counts, array sizes and indices.
pub type Size = usize;

/// Seed of a pseudorandom stream.
pub type Seed = u64;

/// An energy level.
pub type Energy = Real;

/// An absolute temperature.
pub type Temperature = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use params::{CircleParams, DistributionParams};
