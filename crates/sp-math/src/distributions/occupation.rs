//! Occupation-number distributions of statistical mechanics.
//!
//! With `x = (e − μ) / (k_B T)` all three share the form
//!
//! ```text
//! f(x) = 1 / (exp(x) + a)      a = +1  Fermi-Dirac
//!                              a = −1  Bose-Einstein
//!                              a =  0  Maxwell-Boltzmann
//! ```
//!
//! The free functions [`fermi`], [`bose`] and [`maxwell`] are unchecked and
//! generic over [`num_traits::Float`].  [`Occupation::try_evaluate`] and
//! friends validate their inputs and turn non-finite results (the
//! Bose-Einstein pole at `e == μ`) into [`Error::NonFinite`].

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use num_traits::Float;
use sp_core::errors::{finite, positive_finite};
use sp_core::{ensure_arg, DistributionParams, Energy, Error, Real, Result, Temperature};

use crate::array::Array;
use crate::grid::Grid;

/// Reduced energy `(e − μ) / (k_B T)`.
#[inline]
fn reduced_energy<T: Float>(e: T, t: T, mu: T, kb: T) -> T {
    (e - mu) / (kb * t)
}

/// Fermi-Dirac occupation `1 / (exp((e − μ)/(k_B T)) + 1)`.
///
/// Equals exactly `0.5` at `e == μ` for every `T > 0`.
#[inline]
pub fn fermi<T: Float>(e: T, t: T, mu: T, kb: T) -> T {
    T::one() / (reduced_energy(e, t, mu, kb).exp() + T::one())
}

/// Bose-Einstein occupation `1 / (exp((e − μ)/(k_B T)) − 1)`.
///
/// Diverges at `e == μ`: the result is `±∞` there, and negative below `μ`.
/// Use [`Occupation::try_evaluate`] to have the pole reported as an error.
#[inline]
pub fn bose<T: Float>(e: T, t: T, mu: T, kb: T) -> T {
    T::one() / (reduced_energy(e, t, mu, kb).exp() - T::one())
}

/// Maxwell-Boltzmann occupation `1 / exp((e − μ)/(k_B T))`.
#[inline]
pub fn maxwell<T: Float>(e: T, t: T, mu: T, kb: T) -> T {
    T::one() / reduced_energy(e, t, mu, kb).exp()
}

/// One of the three occupation statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupation {
    /// Fermions.
    FermiDirac,
    /// Bosons.
    BoseEinstein,
    /// Classical particles.
    MaxwellBoltzmann,
}

impl Occupation {
    /// All three statistics, in figure order.
    pub const ALL: [Occupation; 3] = [
        Occupation::FermiDirac,
        Occupation::BoseEinstein,
        Occupation::MaxwellBoltzmann,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Occupation::FermiDirac => "Fermi-Dirac",
            Occupation::BoseEinstein => "Bose-Einstein",
            Occupation::MaxwellBoltzmann => "Maxwell-Boltzmann",
        }
    }

    /// Unchecked evaluation at a single `(e, T)` point.
    #[inline]
    pub fn evaluate(&self, e: Energy, t: Temperature, params: &DistributionParams) -> Real {
        self.evaluate_generic(e, t, params.mu, params.kb)
    }

    /// Unchecked evaluation, generic over the float type.
    #[inline]
    pub fn evaluate_generic<T: Float>(&self, e: T, t: T, mu: T, kb: T) -> T {
        match self {
            Occupation::FermiDirac => fermi(e, t, mu, kb),
            Occupation::BoseEinstein => bose(e, t, mu, kb),
            Occupation::MaxwellBoltzmann => maxwell(e, t, mu, kb),
        }
    }

    /// Checked evaluation at a single `(e, T)` point.
    ///
    /// Fails with `InvalidArgument` if `e` is not finite, `T` is not
    /// positive and finite, or `params` is invalid, and with `NonFinite` if
    /// the result is NaN or infinite.
    pub fn try_evaluate(
        &self,
        e: Energy,
        t: Temperature,
        params: &DistributionParams,
    ) -> Result<Real> {
        params.validate()?;
        self.checked_point(e, t, params)
    }

    /// Unchecked evaluation over an energy axis at a fixed temperature.
    ///
    /// The output has the same length as `energies`.
    pub fn evaluate_array(
        &self,
        energies: &Array,
        t: Temperature,
        params: &DistributionParams,
    ) -> Array {
        energies.map(|e| self.evaluate(e, t, params))
    }

    /// Checked evaluation over an energy axis at a fixed temperature.
    pub fn try_evaluate_array(
        &self,
        energies: &Array,
        t: Temperature,
        params: &DistributionParams,
    ) -> Result<Array> {
        params.validate()?;
        energies
            .iter()
            .map(|&e| self.checked_point(e, t, params))
            .collect::<Result<Vec<_>>>()
            .map(Array::from_vec)
    }

    /// Element-wise checked evaluation over paired energies and
    /// temperatures.
    ///
    /// Fails with `InvalidArgument` if the arrays differ in length.
    pub fn evaluate_pairs(
        &self,
        energies: &Array,
        temperatures: &Array,
        params: &DistributionParams,
    ) -> Result<Array> {
        ensure_arg!(
            energies.len() == temperatures.len(),
            "energy and temperature arrays differ in length ({} vs {})",
            energies.len(),
            temperatures.len()
        );
        params.validate()?;
        energies
            .iter()
            .zip(temperatures.iter())
            .map(|(&e, &t)| self.checked_point(e, t, params))
            .collect::<Result<Vec<_>>>()
            .map(Array::from_vec)
    }

    /// Unchecked evaluation over the `temperatures × energies` mesh.
    ///
    /// Row `i` holds the curve at `temperatures[i]`; column `j` the values
    /// at `energies[j]`.
    pub fn evaluate_grid(
        &self,
        energies: &Array,
        temperatures: &Array,
        params: &DistributionParams,
    ) -> Grid {
        debug!(
            "{} surface over {} temperatures x {} energies",
            self.name(),
            temperatures.len(),
            energies.len()
        );
        Grid::from_fn(temperatures.len(), energies.len(), |i, j| {
            self.evaluate(energies[j], temperatures[i], params)
        })
    }

    /// Checked evaluation over the `temperatures × energies` mesh.
    pub fn try_evaluate_grid(
        &self,
        energies: &Array,
        temperatures: &Array,
        params: &DistributionParams,
    ) -> Result<Grid> {
        params.validate()?;
        Grid::try_from_fn(temperatures.len(), energies.len(), |i, j| {
            self.checked_point(energies[j], temperatures[i], params)
        })
    }

    fn checked_point(&self, e: Energy, t: Temperature, params: &DistributionParams) -> Result<Real> {
        finite("energy", e)?;
        positive_finite("temperature", t)?;
        let value = self.evaluate(e, t, params);
        if value.is_finite() {
            Ok(value)
        } else {
            warn!(
                "{} occupation is not finite at e = {e}, T = {t}, mu = {}",
                self.name(),
                params.mu
            );
            Err(Error::NonFinite {
                what: format!("{} occupation at e = {e}, T = {t}", self.name()),
                value,
            })
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Occupation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fermi" | "fermi-dirac" | "fd" => Ok(Occupation::FermiDirac),
            "bose" | "bose-einstein" | "be" => Ok(Occupation::BoseEinstein),
            "maxwell" | "maxwell-boltzmann" | "mb" => Ok(Occupation::MaxwellBoltzmann),
            other => Err(Error::InvalidArgument(format!(
                "unknown distribution '{other}'"
            ))),
        }
    }
}

/// Fails with `InvalidArgument` unless every temperature on the axis is
/// positive and finite.
///
/// The unchecked evaluators accept any temperature; callers feeding them
/// user input run this first.
pub fn validate_temperatures(temperatures: &Array) -> Result<()> {
    for &t in temperatures.iter() {
        positive_finite("temperature", t)?;
    }
    Ok(())
}

/// Default temperature of the 2D cut in [`OccupationSlice`].
pub const DEFAULT_SLICE_TEMPERATURE: Temperature = 0.01;

/// The data behind one column of the classic occupation figure: a curve at
/// a fixed low temperature above the full energy × temperature surface.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupationSlice {
    /// Which statistics were evaluated.
    pub occupation: Occupation,
    /// Energy axis.
    pub energies: Array,
    /// Temperature axis (grid rows).
    pub temperatures: Array,
    /// Temperature of the 2D cut.
    pub slice_temperature: Temperature,
    /// Occupation along `energies` at `slice_temperature`.
    pub curve: Array,
    /// Occupation over the `temperatures × energies` mesh.
    pub surface: Grid,
}

impl OccupationSlice {
    /// Evaluate the curve and the surface.
    ///
    /// The curve is always evaluated with [`DistributionParams::default`];
    /// `params` applies to the surface only.  Both are unchecked, so the
    /// Bose-Einstein pole shows up as non-finite cells.
    pub fn compute(
        occupation: Occupation,
        energies: &Array,
        temperatures: &Array,
        slice_temperature: Temperature,
        params: &DistributionParams,
    ) -> Result<Self> {
        ensure_arg!(!energies.is_empty(), "energy axis is empty");
        ensure_arg!(!temperatures.is_empty(), "temperature axis is empty");
        positive_finite("slice temperature", slice_temperature)?;
        validate_temperatures(temperatures)?;
        params.validate()?;

        let curve =
            occupation.evaluate_array(energies, slice_temperature, &DistributionParams::default());
        let surface = occupation.evaluate_grid(energies, temperatures, params);
        Ok(Self {
            occupation,
            energies: energies.clone(),
            temperatures: temperatures.clone(),
            slice_temperature,
            curve,
            surface,
        })
    }

    /// One slice per statistics, in figure order.
    pub fn compute_all(
        energies: &Array,
        temperatures: &Array,
        slice_temperature: Temperature,
        params: &DistributionParams,
    ) -> Result<Vec<Self>> {
        Occupation::ALL
            .iter()
            .map(|&o| Self::compute(o, energies, temperatures, slice_temperature, params))
            .collect()
    }
}
