//! Command-line interface of the `statphys` binary.
//!
//! Argument parsing lives here rather than in the binary so the mapping
//! from flags to parameters can be driven from tests with
//! [`Cli::try_parse_from`](clap::Parser::try_parse_from) and [`run`].

use std::io::Write;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::Result;
use sp_core::errors::positive_finite;
use sp_core::params::{DEFAULT_KB, DEFAULT_MU, DEFAULT_RADIUS, DEFAULT_SAMPLES, DEFAULT_SEED};
use sp_core::{CircleParams, DistributionParams};
use sp_math::distributions::{
    validate_temperatures, Occupation, OccupationSlice, DEFAULT_SLICE_TEMPERATURE,
};
use sp_math::random_numbers::{MersenneTwisterUniformRng, StdUniformRng};
use sp_math::Array;
use sp_methods::{sample_circle, sample_circle_with, ErrorSweep};

use crate::report;

/// Parsed command line.
#[derive(Parser)]
#[command(
    name = "statphys",
    author,
    version,
    about = "Occupation distributions and Monte Carlo circle integration"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[allow(missing_docs)]
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Subcommands; each writes CSV to the output.
#[allow(missing_docs)]
#[derive(Subcommand)]
pub enum Commands {
    /// Occupation curve at a fixed temperature (CSV e,f)
    Occupation {
        #[command(flatten)]
        dist: DistArgs,
        #[command(flatten)]
        energies: EnergyAxis,
        /// Temperature of the curve
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        temperature: f64,
        /// Fail on non-finite values instead of printing them
        #[arg(long)]
        checked: bool,
    },

    /// Occupation over an energy x temperature grid (CSV e,T,f)
    Surface {
        #[command(flatten)]
        dist: DistArgs,
        #[command(flatten)]
        energies: EnergyAxis,
        #[command(flatten)]
        temperatures: TemperatureAxis,
        /// Fail on non-finite values instead of printing them
        #[arg(long)]
        checked: bool,
    },

    /// Low-temperature curve plus surface, for one or all distributions
    Slice {
        /// Distribution; all three when omitted
        #[arg(short, long, value_enum)]
        dist: Option<Dist>,
        #[command(flatten)]
        params: ParamArgs,
        #[command(flatten)]
        energies: EnergyAxis,
        #[command(flatten)]
        temperatures: TemperatureAxis,
        /// Temperature of the 2D cut
        #[arg(long, default_value_t = DEFAULT_SLICE_TEMPERATURE, allow_negative_numbers = true)]
        slice_temperature: f64,
    },

    /// Estimate the circle area once and print the absolute error
    Circle {
        /// Number of sampled points
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
        /// Circle radius
        #[arg(short, long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
        radius: f64,
        /// RNG seed
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Print every sampled point (CSV x,y,inside) instead
        #[arg(long)]
        points: bool,
        /// Uniform generator
        #[arg(long, value_enum, default_value_t = Generator::Mt)]
        rng: Generator,
    },

    /// Mean and std of the error over seeds, per sample size (CSV n,mean,std)
    ErrStat {
        /// Number of seeds (1..=seeds)
        #[arg(short, long, default_value_t = 10)]
        seeds: usize,
        /// Number of log-spaced sample sizes
        #[arg(short, long, default_value_t = 5)]
        count: usize,
        /// Smallest sample size is 10^start
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,
        /// Largest sample size is 10^stop
        #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
        stop: f64,
        /// Circle radius
        #[arg(short, long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
        radius: f64,
        /// Uniform generator
        #[arg(long, value_enum, default_value_t = Generator::Mt)]
        rng: Generator,
    },
}

/// Distribution selector.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dist {
    Fermi,
    Bose,
    Maxwell,
}

impl From<Dist> for Occupation {
    fn from(d: Dist) -> Self {
        match d {
            Dist::Fermi => Occupation::FermiDirac,
            Dist::Bose => Occupation::BoseEinstein,
            Dist::Maxwell => Occupation::MaxwellBoltzmann,
        }
    }
}

/// Uniform generator backing the sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Generator {
    /// Mersenne Twister MT19937-64
    Mt,
    /// rand's StdRng
    Std,
}

/// Distribution plus its parameters.
#[derive(Args)]
pub struct DistArgs {
    /// Distribution
    #[arg(short, long, value_enum)]
    dist: Dist,
    #[command(flatten)]
    params: ParamArgs,
}

/// Chemical potential and Boltzmann constant.
#[derive(Args)]
pub struct ParamArgs {
    /// Chemical potential
    #[arg(long, default_value_t = DEFAULT_MU, allow_negative_numbers = true)]
    mu: f64,
    /// Boltzmann constant
    #[arg(long, default_value_t = DEFAULT_KB, allow_negative_numbers = true)]
    kb: f64,
}

impl ParamArgs {
    /// Validated distribution parameters.
    pub fn params(&self) -> sp_core::Result<DistributionParams> {
        let params = DistributionParams::new(self.mu, self.kb);
        params.validate()?;
        Ok(params)
    }
}

/// Evenly spaced energy axis.
#[derive(Args)]
pub struct EnergyAxis {
    /// Lowest energy
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    e_min: f64,
    /// Highest energy
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    e_max: f64,
    /// Number of energy points
    #[arg(long, default_value_t = 101)]
    e_points: usize,
}

impl EnergyAxis {
    /// The sampled energies.
    pub fn array(&self) -> Array {
        Array::linspace(self.e_min, self.e_max, self.e_points)
    }
}

/// Evenly spaced temperature axis.
#[derive(Args)]
pub struct TemperatureAxis {
    /// Lowest temperature
    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
    t_min: f64,
    /// Highest temperature
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    t_max: f64,
    /// Number of temperature points
    #[arg(long, default_value_t = 50)]
    t_points: usize,
}

impl TemperatureAxis {
    /// The sampled temperatures; fails unless every one is positive and
    /// finite.
    pub fn array(&self) -> sp_core::Result<Array> {
        let ts = Array::linspace(self.t_min, self.t_max, self.t_points);
        validate_temperatures(&ts)?;
        Ok(ts)
    }
}

/// Execute `command`, writing its CSV output to `out`.
pub fn run<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Occupation {
            dist,
            energies,
            temperature,
            checked,
        } => {
            let occupation = Occupation::from(dist.dist);
            let params = dist.params.params()?;
            positive_finite("temperature", temperature)?;
            let es = energies.array();
            log::info!(
                "{occupation} curve: {} energies at T = {temperature}",
                es.len()
            );
            let values = if checked {
                occupation.try_evaluate_array(&es, temperature, &params)?
            } else {
                occupation.evaluate_array(&es, temperature, &params)
            };
            if !values.all_finite() {
                log::warn!("{occupation} curve contains non-finite values");
            }
            report::write_curve(out, &es, &values)?;
        }

        Commands::Surface {
            dist,
            energies,
            temperatures,
            checked,
        } => {
            let occupation = Occupation::from(dist.dist);
            let params = dist.params.params()?;
            let (es, ts) = (energies.array(), temperatures.array()?);
            let surface = if checked {
                occupation.try_evaluate_grid(&es, &ts, &params)?
            } else {
                occupation.evaluate_grid(&es, &ts, &params)
            };
            if !surface.all_finite() {
                log::warn!("{occupation} surface contains non-finite values");
            }
            report::write_surface(out, &es, &ts, &surface)?;
        }

        Commands::Slice {
            dist,
            params,
            energies,
            temperatures,
            slice_temperature,
        } => {
            let params = params.params()?;
            let (es, ts) = (energies.array(), temperatures.array()?);
            let slices = match dist {
                Some(d) => vec![OccupationSlice::compute(
                    d.into(),
                    &es,
                    &ts,
                    slice_temperature,
                    &params,
                )?],
                None => OccupationSlice::compute_all(&es, &ts, slice_temperature, &params)?,
            };
            for (k, slice) in slices.iter().enumerate() {
                if k > 0 {
                    writeln!(out)?;
                }
                report::write_slice(out, slice)?;
            }
        }

        Commands::Circle {
            samples,
            radius,
            seed,
            points,
            rng,
        } => {
            let params = CircleParams::new(samples, radius, seed);
            let sample = match rng {
                Generator::Mt => sample_circle(&params)?,
                Generator::Std => sample_circle_with::<StdUniformRng>(&params)?,
            };
            log::info!(
                "N = {samples}, r = {radius}, seed = {seed}: {} hits, area ≈ {} (exact {})",
                sample.hits(),
                sample.estimate(),
                sample.exact_area()
            );
            if points {
                report::write_points(out, &sample)?;
            } else {
                writeln!(out, "{}", sample.abs_error())?;
            }
        }

        Commands::ErrStat {
            seeds,
            count,
            start,
            stop,
            radius,
            rng,
        } => {
            let sweep = ErrorSweep::log_spaced(seeds, count, start, stop)?.with_radius(radius);
            let stats = match rng {
                Generator::Mt => sweep.run_with::<MersenneTwisterUniformRng>()?,
                Generator::Std => sweep.run_with::<StdUniformRng>()?,
            };
            report::write_error_statistics(out, &stats)?;
        }
    }
    Ok(())
}
