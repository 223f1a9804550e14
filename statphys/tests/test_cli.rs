//! Command-line parsing and dispatch, driven in-process.

use approx::assert_relative_eq;
use clap::Parser;
use statphys::cli::{self, Cli};
use statphys::core::Error;
use statphys::methods::integrate_circle;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("statphys").chain(args.iter().copied())).unwrap()
}

fn output(args: &[&str]) -> String {
    let mut buf = Vec::new();
    cli::run(parse(args).command, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn error(args: &[&str]) -> Error {
    let mut buf = Vec::new();
    let report = cli::run(parse(args).command, &mut buf).unwrap_err();
    report
        .downcast_ref::<Error>()
        .cloned()
        .unwrap_or_else(|| panic!("unexpected error: {report:?}"))
}

fn last_value(csv: &str) -> f64 {
    let line = csv.lines().last().unwrap();
    line.rsplit(',').next().unwrap().parse().unwrap()
}

#[test]
fn negative_chemical_potential_is_accepted() {
    let args = [
        "occupation", "--dist", "fermi", "--mu", "-0.5",
        "--e-min", "-0.5", "--e-max", "-0.5", "--e-points", "1",
    ];
    assert_eq!(output(&args), "e,f\n-0.5,0.5\n");
}

#[test]
fn parameters_reach_the_evaluation() {
    let args = [
        "occupation", "--dist", "maxwell", "--mu", "-1", "--kb", "2",
        "-t", "0.5", "--e-min", "1", "--e-max", "1", "--e-points", "1",
    ];
    // x = (1 - (-1)) / (2 * 0.5) = 2
    assert_relative_eq!(last_value(&output(&args)), (-2.0_f64).exp(), max_relative = 1e-14);
}

#[test]
fn non_positive_temperatures_are_rejected() {
    let surface = [
        "surface", "--dist", "bose", "--e-points", "3", "--t-points", "2", "--t-min", "0",
    ];
    assert!(matches!(error(&surface), Error::InvalidArgument(_)));

    let surface = [
        "surface", "--dist", "fermi", "--t-min", "-1", "--t-max", "1", "--t-points", "3",
    ];
    assert!(matches!(error(&surface), Error::InvalidArgument(_)));

    let curve = ["occupation", "--dist", "fermi", "-t", "-0.1"];
    assert!(matches!(error(&curve), Error::InvalidArgument(_)));

    let slice = ["slice", "--t-min", "0", "--t-points", "2"];
    assert!(matches!(error(&slice), Error::InvalidArgument(_)));
}

#[test]
fn invalid_boltzmann_constant_is_rejected() {
    let args = ["surface", "--dist", "fermi", "--kb", "-1"];
    assert!(matches!(error(&args), Error::InvalidArgument(_)));
}

#[test]
fn checked_surface_reports_the_bose_pole() {
    // the energy axis 0, 0.1, 0.2 hits mu = 0.1
    let axes = [
        "surface", "--dist", "bose", "--e-min", "0", "--e-max", "0.2", "--e-points", "3",
        "--t-min", "0.5", "--t-max", "1", "--t-points", "2",
    ];
    let unchecked = output(&axes);
    assert_eq!(unchecked.lines().count(), 7);
    assert!(unchecked.contains("inf"));

    let checked: Vec<_> = axes.iter().copied().chain(["--checked"]).collect();
    assert!(matches!(error(&checked), Error::NonFinite { .. }));
}

#[test]
fn circle_defaults() {
    let out = output(&["circle"]);
    let err: f64 = out.trim().parse().unwrap();
    assert_eq!(err, integrate_circle(100, 1.0, 1).unwrap());

    assert!(matches!(error(&["circle", "-r", "-1"]), Error::InvalidArgument(_)));
    assert!(matches!(error(&["circle", "-n", "0"]), Error::InvalidArgument(_)));
}

#[test]
fn err_stat_accepts_negative_exponent() {
    // 10^-1 clamps to one sample and merges with 10^0
    let out = output(&[
        "err-stat", "--seeds", "2", "--count", "3", "--start", "-1", "--stop", "1",
    ]);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,"));
    assert!(lines[2].starts_with("10,"));
}

#[test]
fn verbosity_selects_log_level() {
    assert_eq!(parse(&["circle"]).log_level(), log::LevelFilter::Info);
    assert_eq!(parse(&["-v", "circle"]).log_level(), log::LevelFilter::Debug);
    assert_eq!(parse(&["circle", "-vv"]).log_level(), log::LevelFilter::Trace);
}
