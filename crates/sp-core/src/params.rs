//! Parameter sets with the library-wide defaults.
//!
//! All configuration is carried by plain values; there is no process-wide
//! state.  Each parameter set has a `Default` impl holding the conventional
//! values and `with_*` builders for overriding them.

use crate::errors::{finite, positive_finite, Result};
use crate::{ensure_arg, Real, Seed, Size};

/// Default chemical potential.
pub const DEFAULT_MU: Real = 0.1;

/// Default Boltzmann constant (natural units).
pub const DEFAULT_KB: Real = 1.0;

/// Default circle radius.
pub const DEFAULT_RADIUS: Real = 1.0;

/// Default RNG seed.
pub const DEFAULT_SEED: Seed = 1;

/// Default number of Monte Carlo samples.
pub const DEFAULT_SAMPLES: Size = 100;

/// Chemical potential and Boltzmann constant shared by the occupation
/// distributions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParams {
    /// Chemical potential `mu`.
    pub mu: Real,
    /// Boltzmann constant `kB`.
    pub kb: Real,
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self {
            mu: DEFAULT_MU,
            kb: DEFAULT_KB,
        }
    }
}

impl DistributionParams {
    /// Create a parameter set.
    pub fn new(mu: Real, kb: Real) -> Self {
        Self { mu, kb }
    }

    /// Override the chemical potential.
    pub fn with_mu(mut self, mu: Real) -> Self {
        self.mu = mu;
        self
    }

    /// Override the Boltzmann constant.
    pub fn with_kb(mut self, kb: Real) -> Self {
        self.kb = kb;
        self
    }

    /// Check that `mu` is finite and `kB` is positive and finite.
    pub fn validate(&self) -> Result<()> {
        finite("mu", self.mu)?;
        positive_finite("kB", self.kb)?;
        Ok(())
    }
}

/// Sample count, radius and seed of a single circle integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleParams {
    /// Number of sampled points `N`.
    pub samples: Size,
    /// Circle radius (also the half-width of the sampling square).
    pub radius: Real,
    /// RNG seed.
    pub seed: Seed,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            radius: DEFAULT_RADIUS,
            seed: DEFAULT_SEED,
        }
    }
}

impl CircleParams {
    /// Create a parameter set.
    pub fn new(samples: Size, radius: Real, seed: Seed) -> Self {
        Self {
            samples,
            radius,
            seed,
        }
    }

    /// Override the sample count.
    pub fn with_samples(mut self, samples: Size) -> Self {
        self.samples = samples;
        self
    }

    /// Override the radius.
    pub fn with_radius(mut self, radius: Real) -> Self {
        self.radius = radius;
        self
    }

    /// Override the seed.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Check that `samples > 0` and the radius is positive and finite.
    pub fn validate(&self) -> Result<()> {
        ensure_arg!(self.samples > 0, "sample count must be positive");
        positive_finite("radius", self.radius)?;
        Ok(())
    }
}
