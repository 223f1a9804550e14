//! Seeded uniform random number generators.
//!
//! Every generator is built from an explicit seed; there is no global RNG
//! state, so the same seed always reproduces the same stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_mt::Mt19937GenRand64;
use sp_core::{Real, Seed};

/// A seedable source of uniform deviates in `[0, 1)`.
pub trait UniformRng {
    /// Create a generator whose stream is fully determined by `seed`.
    fn from_seed(seed: Seed) -> Self
    where
        Self: Sized;

    /// Generate the next uniform deviate in `[0, 1)`.
    fn next_real(&mut self) -> Real;

    /// Generate the next uniform deviate in `[low, high)`.
    #[inline]
    fn uniform(&mut self, low: Real, high: Real) -> Real {
        low + (high - low) * self.next_real()
    }

    /// Draw `n` uniform deviates in `[low, high)`.
    fn uniform_vec(&mut self, low: Real, high: Real, n: usize) -> Vec<Real> {
        (0..n).map(|_| self.uniform(low, high)).collect()
    }
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
///
/// This is the default generator of the Monte Carlo estimators.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: Seed) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }
}

impl UniformRng for MersenneTwisterUniformRng {
    fn from_seed(seed: Seed) -> Self {
        Self::new(seed)
    }

    fn next_real(&mut self) -> Real {
        // top 53 bits -> [0.0, 1.0) with full double resolution
        (self.rng.next_u64() >> 11) as Real * (1.0 / (1u64 << 53) as Real)
    }
}

/// A uniform generator backed by `rand`'s `StdRng`.
///
/// Reproducible for a fixed seed and `rand` version; the stream may change
/// across `rand` releases.
pub struct StdUniformRng {
    rng: StdRng,
}

impl StdUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: Seed) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformRng for StdUniformRng {
    fn from_seed(seed: Seed) -> Self {
        Self::new(seed)
    }

    fn next_real(&mut self) -> Real {
        self.rng.gen::<Real>()
    }
}
