//! Error statistics of the circle estimate over a seed × sample-size sweep.

use log::{debug, info};
use sp_core::params::DEFAULT_RADIUS;
use sp_core::{ensure_arg, Real, Result, Seed, Size};
use sp_math::random_numbers::{MersenneTwisterUniformRng, UniformRng};
use sp_math::statistics::column_mean_std;
use sp_math::{Array, Grid};

use super::integrate_circle_with;

/// `count` sample sizes spread evenly on a log10 scale between `10^start`
/// and `10^stop`, rounded to the nearest integer.
///
/// Sizes that collapse onto the same integer are kept once, so the result
/// may be shorter than `count`; every size is at least 1.
///
/// # Example
/// ```
/// use sp_methods::log_spaced_sample_sizes;
/// assert_eq!(
///     log_spaced_sample_sizes(5, 0.0, 4.0).unwrap(),
///     vec![1, 10, 100, 1_000, 10_000]
/// );
/// ```
pub fn log_spaced_sample_sizes(count: Size, start: Real, stop: Real) -> Result<Vec<Size>> {
    ensure_arg!(count > 0, "sample size count must be positive");
    ensure_arg!(
        start.is_finite() && stop.is_finite(),
        "log-scale bounds must be finite, got [{start}, {stop}]"
    );
    ensure_arg!(
        start <= stop,
        "log-scale start {start} exceeds stop {stop}"
    );
    // usize::MAX as f64 rounds up; keep well inside the range
    ensure_arg!(stop < 18.0, "log-scale stop {stop} is too large");

    let mut sizes: Vec<Size> = Array::logspace(start, stop, count)
        .iter()
        .map(|&n| (n.round() as Size).max(1))
        .collect();
    sizes.dedup();
    Ok(sizes)
}

/// Result of an [`ErrorSweep`].
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorStatistics {
    /// The swept sample sizes, in input order.
    pub sample_sizes: Vec<Size>,
    /// Absolute errors; row `i` is seed `i + 1`, column `j` is
    /// `sample_sizes[j]`.
    pub errors: Grid,
    /// Mean error over seeds, one per sample size.
    pub means: Array,
    /// Population standard deviation of the error over seeds, one per
    /// sample size.
    pub stds: Array,
}

impl ErrorStatistics {
    /// Number of sample sizes.
    pub fn len(&self) -> usize {
        self.sample_sizes.len()
    }

    /// Whether the sweep had no sample sizes.  Never true for a result of
    /// [`ErrorSweep::run`].
    pub fn is_empty(&self) -> bool {
        self.sample_sizes.is_empty()
    }

    /// Number of seeds the errors were reduced over.
    pub fn n_seeds(&self) -> usize {
        self.errors.rows()
    }

    /// `(sample size, mean, std)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (Size, Real, Real)> + '_ {
        self.sample_sizes
            .iter()
            .enumerate()
            .map(|(j, &n)| (n, self.means[j], self.stds[j]))
    }
}

/// A seed × sample-size sweep of [`integrate_circle`](super::integrate_circle).
///
/// Seeds run over `1..=n_seeds`; each `(seed, N)` cell is an independent
/// estimate with a freshly seeded generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSweep {
    n_seeds: Size,
    sample_sizes: Vec<Size>,
    radius: Real,
}

impl ErrorSweep {
    /// Sweep `n_seeds` seeds over `sample_sizes` with the default radius.
    pub fn new(n_seeds: Size, sample_sizes: impl Into<Vec<Size>>) -> Self {
        Self {
            n_seeds,
            sample_sizes: sample_sizes.into(),
            radius: DEFAULT_RADIUS,
        }
    }

    /// Sweep over `count` log-spaced sample sizes between `10^start` and
    /// `10^stop`.
    pub fn log_spaced(n_seeds: Size, count: Size, start: Real, stop: Real) -> Result<Self> {
        Ok(Self::new(n_seeds, log_spaced_sample_sizes(count, start, stop)?))
    }

    /// Override the circle radius.
    pub fn with_radius(mut self, radius: Real) -> Self {
        self.radius = radius;
        self
    }

    /// Number of seeds.
    pub fn n_seeds(&self) -> Size {
        self.n_seeds
    }

    /// The sample sizes.
    pub fn sample_sizes(&self) -> &[Size] {
        &self.sample_sizes
    }

    /// Circle radius.
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Fails with `InvalidArgument` on zero seeds, no sample sizes, a zero
    /// sample size, or a bad radius.
    pub fn validate(&self) -> Result<()> {
        ensure_arg!(self.n_seeds > 0, "number of seeds must be positive");
        ensure_arg!(
            !self.sample_sizes.is_empty(),
            "at least one sample size is required"
        );
        ensure_arg!(
            self.sample_sizes.iter().all(|&n| n > 0),
            "sample sizes must be positive, got {:?}",
            self.sample_sizes
        );
        sp_core::errors::positive_finite("radius", self.radius)?;
        Ok(())
    }

    /// Run the sweep with the default Mersenne Twister generator.
    pub fn run(&self) -> Result<ErrorStatistics> {
        self.run_with::<MersenneTwisterUniformRng>()
    }

    /// Run the sweep with generator `R`.
    pub fn run_with<R: UniformRng>(&self) -> Result<ErrorStatistics> {
        self.validate()?;
        info!(
            "error sweep: {} seeds x {} sample sizes, r = {}",
            self.n_seeds,
            self.sample_sizes.len(),
            self.radius
        );

        let errors = Grid::try_from_fn(self.n_seeds, self.sample_sizes.len(), |i, j| {
            let seed = (i + 1) as Seed;
            let n = self.sample_sizes[j];
            if j == 0 {
                debug!("seed {seed}");
            }
            integrate_circle_with::<R>(n, self.radius, seed)
        })?;
        let (means, stds) = column_mean_std(&errors)?;

        for (j, &n) in self.sample_sizes.iter().enumerate() {
            debug!("N = {n}: mean {:.6e}, std {:.6e}", means[j], stds[j]);
        }

        Ok(ErrorStatistics {
            sample_sizes: self.sample_sizes.clone(),
            errors,
            means,
            stds,
        })
    }
}

/// Mean and standard deviation of the circle-estimate error over seeds
/// `1..=n_seeds`, for each of `sample_sizes` (unit radius).
///
/// Fails with `InvalidArgument` if `n_seeds` is zero, `sample_sizes` is
/// empty, or any sample size is zero.
pub fn err_stat(n_seeds: Size, sample_sizes: &[Size]) -> Result<ErrorStatistics> {
    ErrorSweep::new(n_seeds, sample_sizes).run()
}
