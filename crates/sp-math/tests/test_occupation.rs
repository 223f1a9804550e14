//! Property tests for the occupation distributions.

use proptest::prelude::*;
use sp_core::{DistributionParams, Real};
use sp_math::comparison::close_enough;
use sp_math::distributions::{bose, fermi, maxwell, Occupation};
use sp_math::Array;

/// `exp(-x)` by argument halving and squaring of a Taylor series, a route
/// independent of `1 / exp(x)`.
fn reference_exp_neg(x: Real) -> Real {
    let mut y = -x;
    let mut halvings = 0;
    while y.abs() > 0.5 {
        y *= 0.5;
        halvings += 1;
    }
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..30 {
        term *= y / k as Real;
        sum += term;
    }
    for _ in 0..halvings {
        sum *= sum;
    }
    sum
}

proptest! {
    #[test]
    fn fermi_is_half_at_mu(t in 1e-6f64..1e6, mu in -10.0f64..10.0, kb in 1e-6f64..10.0) {
        prop_assert_eq!(fermi(mu, t, mu, kb), 0.5);
    }

    #[test]
    fn fermi_is_a_probability(e in -5.0f64..5.0, t in 1e-3f64..10.0) {
        let f = fermi(e, t, 0.1, 1.0);
        prop_assert!((0.0..=1.0).contains(&f));
    }

    #[test]
    fn fermi_particle_hole_symmetry(d in 0.0f64..5.0, t in 0.01f64..10.0) {
        // f(mu + d) + f(mu - d) == 1
        let mu = 0.1;
        let s = fermi(mu + d, t, mu, 1.0) + fermi(mu - d, t, mu, 1.0);
        prop_assert!((s - 1.0).abs() < 1e-12, "sum = {}", s);
    }

    #[test]
    fn maxwell_matches_series_near_mu(x in -0.49f64..0.49, t in 0.1f64..10.0) {
        // below 0.5 in magnitude the series is summed directly
        let mu = 0.1;
        let e = mu + x * t;
        let got = maxwell(e, t, mu, 1.0);
        let want = reference_exp_neg((e - mu) / t);
        prop_assert!(close_enough(got, want, 8), "got {}, want {}", got, want);
    }

    #[test]
    fn maxwell_matches_series(x in -3.9f64..3.9, t in 0.1f64..10.0) {
        // at most three squarings, each doubling the relative error
        let mu = 0.1;
        let e = mu + x * t;
        let got = maxwell(e, t, mu, 1.0);
        let want = reference_exp_neg((e - mu) / t);
        prop_assert!(close_enough(got, want, 64), "got {}, want {}", got, want);
    }

    #[test]
    fn bose_exceeds_maxwell_above_mu(e in 0.11f64..5.0, t in 0.1f64..10.0) {
        prop_assert!(bose(e, t, 0.1, 1.0) > maxwell(e, t, 0.1, 1.0));
    }
}

#[test]
fn broadcast_matches_scalar_for_every_statistics() {
    let params = DistributionParams::default();
    let es = Array::linspace(0.2, 1.0, 9);
    let ts = Array::linspace(0.5, 2.0, 9);
    for occupation in Occupation::ALL {
        let pairs = occupation.evaluate_pairs(&es, &ts, &params).unwrap();
        assert_eq!(pairs.len(), es.len());
        for i in 0..es.len() {
            assert_eq!(pairs[i], occupation.evaluate(es[i], ts[i], &params));
        }
    }
}

#[test]
fn surface_at_low_temperature_is_step_like() {
    let params = DistributionParams::default();
    let es = Array::linspace(0.0, 0.2, 5);
    let ts = Array::from_slice(&[0.001]);
    let g = Occupation::FermiDirac.evaluate_grid(&es, &ts, &params);
    // well below mu: fully occupied; well above: empty
    assert!(g[(0, 0)] > 1.0 - 1e-12);
    assert_eq!(g[(0, 2)], 0.5);
    assert!(g[(0, 4)] < 1e-12);
}
