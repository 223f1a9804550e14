//! # statphys
//!
//! Occupation-number distributions (Fermi-Dirac, Bose-Einstein,
//! Maxwell-Boltzmann) and a Monte Carlo estimate of a circle's area with
//! seed × sample-size error statistics.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates and adds the [`cli`] module and CSV [`report`] writers behind the
//! `statphys` binary.
//!
//! ## Quick start
//!
//! ```rust
//! use statphys::core::DistributionParams;
//! use statphys::math::distributions::{fermi, Occupation};
//! use statphys::methods::err_stat;
//!
//! assert_eq!(fermi(0.1, 1.0, 0.1, 1.0), 0.5);
//! let f = Occupation::FermiDirac.evaluate(0.1, 0.5, &DistributionParams::default());
//! assert_eq!(f, 0.5);
//!
//! let stats = err_stat(5, &[10, 100, 1000]).unwrap();
//! assert_eq!(stats.means.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, parameter defaults, and error definitions.
pub use sp_core as core;

/// Arrays, grids, statistics, RNG, and occupation distributions.
pub use sp_math as math;

/// Monte Carlo circle integration and error sweeps.
pub use sp_methods as methods;

/// Argument parsing and dispatch for the `statphys` binary.
pub mod cli;

/// CSV writers for curves, surfaces, samples, and sweeps.
pub mod report;
