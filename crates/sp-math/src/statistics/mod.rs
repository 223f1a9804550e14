//! Descriptive statistics over samples and over the columns of a [`Grid`].
//!
//! The reductions delegate to `statrs`.  [`SampleSummary::std_dev`] is the
//! population standard deviation (divisor `n`), which is what the Monte
//! Carlo error sweep reports; the Bessel-corrected value is available as
//! [`SampleSummary::sample_std_dev`].

use sp_core::{ensure_arg, Real, Result};
use statrs::statistics::Statistics;

use crate::array::Array;
use crate::grid::Grid;

/// Summary of a non-empty sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Real,
    /// Population standard deviation.
    pub std_dev: Real,
    /// Smallest observation.
    pub min: Real,
    /// Largest observation.
    pub max: Real,
    sample_variance: Option<Real>,
}

impl SampleSummary {
    /// Summarize `data`.
    ///
    /// Fails with `InvalidArgument` if `data` is empty.
    pub fn from_slice(data: &[Real]) -> Result<Self> {
        ensure_arg!(!data.is_empty(), "cannot summarize an empty sample");
        let sample_variance = if data.len() > 1 {
            Some(Statistics::variance(data.iter()))
        } else {
            None
        };
        Ok(Self {
            count: data.len(),
            mean: Statistics::mean(data.iter()),
            std_dev: Statistics::population_std_dev(data.iter()),
            min: Statistics::min(data.iter()),
            max: Statistics::max(data.iter()),
            sample_variance,
        })
    }

    /// Bessel-corrected standard deviation.  `None` for a single
    /// observation.
    pub fn sample_std_dev(&self) -> Option<Real> {
        self.sample_variance.map(Real::sqrt)
    }

    /// Standard error of the mean, `s / √n`.  `None` for a single
    /// observation.
    pub fn error_estimate(&self) -> Option<Real> {
        self.sample_std_dev().map(|s| s / (self.count as Real).sqrt())
    }
}

/// Summarize every column of `grid` over its rows.
///
/// Fails with `InvalidArgument` if the grid has no rows.
pub fn column_summaries(grid: &Grid) -> Result<Vec<SampleSummary>> {
    ensure_arg!(grid.rows() > 0, "cannot reduce a grid with no rows");
    (0..grid.cols())
        .map(|j| SampleSummary::from_slice(grid.column(j).as_slice()))
        .collect()
}

/// Column means and population standard deviations of `grid`.
pub fn column_mean_std(grid: &Grid) -> Result<(Array, Array)> {
    let summaries = column_summaries(grid)?;
    let means = summaries.iter().map(|s| s.mean).collect();
    let stds = summaries.iter().map(|s| s.std_dev).collect();
    Ok((means, stds))
}
