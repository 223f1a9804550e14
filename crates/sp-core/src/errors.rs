//! Error types for statphys-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Argument checks use the
//! [`ensure_arg!`](crate::ensure_arg) macro and the [`positive_finite`] /
//! [`finite`] helpers.

use std::fmt::Display;

use num_traits::Float;
use thiserror::Error;

/// The top-level error type used throughout statphys-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument (non-positive sample count, radius, temperature,
    /// empty sweep, mismatched shapes, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A computation produced NaN or an infinity.
    #[error("non-finite result for {what}: {value}")]
    NonFinite {
        /// What was being computed.
        what: String,
        /// The offending value.
        value: f64,
    },
}

/// Shorthand `Result` type used throughout statphys-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Require `value` to be finite and strictly positive.
///
/// Returns `Err(Error::InvalidArgument(...))` naming `name` otherwise.
///
/// # Example
/// ```
/// use sp_core::errors::{positive_finite, Error};
/// assert_eq!(positive_finite("r", 2.0_f64), Ok(2.0));
/// assert!(matches!(positive_finite("r", 0.0_f64), Err(Error::InvalidArgument(_))));
/// assert!(positive_finite("r", f64::INFINITY).is_err());
/// ```
pub fn positive_finite<T: Float + Display>(name: &str, value: T) -> Result<T> {
    if value.is_finite() && value > T::zero() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

/// Require `value` to be finite.
///
/// Returns `Err(Error::InvalidArgument(...))` naming `name` otherwise.
pub fn finite<T: Float + Display>(name: &str, value: T) -> Result<T> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sp_core::{ensure_arg, errors::Error};
/// fn count(n: usize) -> sp_core::errors::Result<usize> {
///     ensure_arg!(n > 0, "n must be positive");
///     Ok(n)
/// }
/// assert_eq!(count(0), Err(Error::InvalidArgument("n must be positive".into())));
/// ```
#[macro_export]
macro_rules! ensure_arg {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
