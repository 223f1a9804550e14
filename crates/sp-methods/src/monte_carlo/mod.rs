//! Monte Carlo estimation of the area of a circle.
//!
//! # Overview
//!
//! * [`CircleSample`]: `N` uniform points in the square `[-r, r]²` and how
//!   many of them landed inside the circle of radius `r`
//! * [`integrate_circle`]: absolute error of the area estimate for one
//!   `(N, r, seed)` triple
//! * [`ErrorSweep`] / [`err_stat`]: mean and standard deviation of that
//!   error over seeds `1..=n`, per sample size
//!
//! ```text
//!  area(circle)    π r²        hits
//! -------------- = ------  ≈  ------
//!  area(square)    (2r)²        N
//! ```

use std::f64::consts::PI;

use log::trace;
use sp_core::{CircleParams, Real, Result, Seed, Size};
use sp_math::random_numbers::{MersenneTwisterUniformRng, UniformRng};

mod error_statistics;

pub use error_statistics::{err_stat, log_spaced_sample_sizes, ErrorStatistics, ErrorSweep};

// ─── CircleSample ─────────────────────────────────────────────────────────────

/// One realisation of the sampling experiment.
///
/// Keeps every drawn point so the accepted/rejected split can be inspected
/// or plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSample {
    radius: Real,
    xs: Vec<Real>,
    ys: Vec<Real>,
    hits: usize,
}

impl CircleSample {
    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether no points were sampled.  Never true for a sample built by
    /// [`sample_circle`].
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Circle radius.
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Number of points with `hypot(x, y) ≤ r`.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Fraction of points inside the circle.
    pub fn inside_fraction(&self) -> Real {
        self.hits as Real / self.len() as Real
    }

    /// The exact area `π r²`.
    pub fn exact_area(&self) -> Real {
        PI * self.radius * self.radius
    }

    /// The estimated area `(2r)² · hits / N`.
    pub fn estimate(&self) -> Real {
        let side = 2.0 * self.radius;
        side * side * self.hits as Real / self.len() as Real
    }

    /// The estimate of π implied by the hit ratio, `4 · hits / N`.
    pub fn pi_estimate(&self) -> Real {
        4.0 * self.inside_fraction()
    }

    /// `|π r² − estimate|`.
    pub fn abs_error(&self) -> Real {
        (self.exact_area() - self.estimate()).abs()
    }

    /// The sampled points, in draw order.
    pub fn points(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// The sampled points with their inside/outside classification.
    pub fn classified(&self) -> impl Iterator<Item = (Real, Real, bool)> + '_ {
        let r = self.radius;
        self.points().map(move |(x, y)| (x, y, x.hypot(y) <= r))
    }
}

/// Draw `params.samples` points with the default Mersenne Twister
/// generator.
///
/// Fails with `InvalidArgument` if the sample count is zero or the radius
/// is not positive and finite; nothing is drawn in that case.
pub fn sample_circle(params: &CircleParams) -> Result<CircleSample> {
    sample_circle_with::<MersenneTwisterUniformRng>(params)
}

/// Draw `params.samples` points with generator `R` seeded from
/// `params.seed`.
///
/// All `N` x-coordinates are drawn before the `N` y-coordinates, so the
/// result depends only on `(N, r, seed)` and the generator.
pub fn sample_circle_with<R: UniformRng>(params: &CircleParams) -> Result<CircleSample> {
    params.validate()?;
    let CircleParams {
        samples,
        radius,
        seed,
    } = *params;

    let mut rng = R::from_seed(seed);
    let xs = rng.uniform_vec(-radius, radius, samples);
    let ys = rng.uniform_vec(-radius, radius, samples);
    let hits = xs
        .iter()
        .zip(&ys)
        .filter(|(x, y)| x.hypot(**y) <= radius)
        .count();

    let sample = CircleSample {
        radius,
        xs,
        ys,
        hits,
    };
    trace!(
        "circle N={samples} r={radius} seed={seed}: {hits} hits, estimate {:.6}",
        sample.estimate()
    );
    Ok(sample)
}

/// Absolute error `|π r² − (2r)² · hits / N|` of the area estimate from
/// `samples` points drawn with `seed`.
///
/// Bit-reproducible for fixed arguments.
///
/// # Example
/// ```
/// use sp_methods::integrate_circle;
/// let err = integrate_circle(10_000, 1.0, 7).unwrap();
/// assert!(err >= 0.0 && err < 0.2);
/// assert_eq!(err, integrate_circle(10_000, 1.0, 7).unwrap());
/// assert!(integrate_circle(0, 1.0, 7).is_err());
/// ```
pub fn integrate_circle(samples: Size, radius: Real, seed: Seed) -> Result<Real> {
    integrate_circle_with::<MersenneTwisterUniformRng>(samples, radius, seed)
}

/// [`integrate_circle`] with an explicit generator type.
pub fn integrate_circle_with<R: UniformRng>(
    samples: Size,
    radius: Real,
    seed: Seed,
) -> Result<Real> {
    let params = CircleParams::new(samples, radius, seed);
    sample_circle_with::<R>(&params).map(|s| s.abs_error())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
