//! # sp-methods
//!
//! Numerical methods built on `sp-math`.
//!
//! # Modules
//!
//! * [`monte_carlo`]: rejection-sampling estimate of a circle's area and the
//!   seed × sample-size error-statistics sweep

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Monte Carlo circle integration and error statistics.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use monte_carlo::{
    err_stat, integrate_circle, integrate_circle_with, log_spaced_sample_sizes, sample_circle,
    sample_circle_with, CircleSample, ErrorStatistics, ErrorSweep,
};
