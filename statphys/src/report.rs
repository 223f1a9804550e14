//! CSV rendering of computed data.
//!
//! Every writer emits a header line followed by one record per value, using
//! `,` as separator and Rust's shortest round-trip float formatting, so the
//! output can be fed to any plotting tool.

use std::io::{self, Write};

use sp_math::distributions::OccupationSlice;
use sp_math::{Array, Grid};
use sp_methods::{CircleSample, ErrorStatistics};

/// `e,f` records of a curve.
///
/// # Panics
/// Panics if the arrays differ in length.
pub fn write_curve<W: Write>(out: &mut W, energies: &Array, values: &Array) -> io::Result<()> {
    assert_eq!(energies.len(), values.len(), "curve length mismatch");
    writeln!(out, "e,f")?;
    for (e, f) in energies.iter().zip(values.iter()) {
        writeln!(out, "{e},{f}")?;
    }
    Ok(())
}

/// `e,T,f` records of a surface; row `i` of `surface` belongs to
/// `temperatures[i]`.
///
/// # Panics
/// Panics if the grid shape does not match the axes.
pub fn write_surface<W: Write>(
    out: &mut W,
    energies: &Array,
    temperatures: &Array,
    surface: &Grid,
) -> io::Result<()> {
    assert_eq!(
        surface.shape(),
        (temperatures.len(), energies.len()),
        "surface shape mismatch"
    );
    writeln!(out, "e,T,f")?;
    for (i, t) in temperatures.iter().enumerate() {
        for (j, e) in energies.iter().enumerate() {
            writeln!(out, "{e},{t},{}", surface[(i, j)])?;
        }
    }
    Ok(())
}

/// A commented title line, the curve, a blank line, then the surface.
pub fn write_slice<W: Write>(out: &mut W, slice: &OccupationSlice) -> io::Result<()> {
    writeln!(
        out,
        "# {} distribution, slice at T = {}",
        slice.occupation, slice.slice_temperature
    )?;
    write_curve(out, &slice.energies, &slice.curve)?;
    writeln!(out)?;
    write_surface(out, &slice.energies, &slice.temperatures, &slice.surface)
}

/// `x,y,inside` records of every sampled point.
pub fn write_points<W: Write>(out: &mut W, sample: &CircleSample) -> io::Result<()> {
    writeln!(out, "x,y,inside")?;
    for (x, y, inside) in sample.classified() {
        writeln!(out, "{x},{y},{}", u8::from(inside))?;
    }
    Ok(())
}

/// `n,mean,std` records of a sweep.
pub fn write_error_statistics<W: Write>(out: &mut W, stats: &ErrorStatistics) -> io::Result<()> {
    writeln!(out, "n,mean,std")?;
    for (n, mean, std) in stats.rows() {
        writeln!(out, "{n},{mean},{std}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::{CircleParams, DistributionParams};
    use sp_math::distributions::Occupation;
    use sp_methods::{err_stat, sample_circle};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn curve_records() {
        let es = Array::from_slice(&[0.0, 0.5]);
        let fs = Array::from_slice(&[1.0, 0.25]);
        let s = render(|w| write_curve(w, &es, &fs));
        assert_eq!(s, "e,f\n0,1\n0.5,0.25\n");
    }

    #[test]
    fn surface_is_row_major_over_temperature() {
        let es = Array::from_slice(&[0.0, 1.0]);
        let ts = Array::from_slice(&[2.0, 3.0]);
        let g = Grid::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let s = render(|w| write_surface(w, &es, &ts, &g));
        assert_eq!(s, "e,T,f\n0,2,1\n1,2,2\n0,3,3\n1,3,4\n");
    }

    #[test]
    fn slice_has_title_and_both_tables() {
        let es = Array::linspace(0.0, 0.2, 3);
        let ts = Array::from_slice(&[1.0]);
        let slice = OccupationSlice::compute(
            Occupation::MaxwellBoltzmann,
            &es,
            &ts,
            0.01,
            &DistributionParams::default(),
        )
        .unwrap();
        let s = render(|w| write_slice(w, &slice));
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines[0], "# Maxwell-Boltzmann distribution, slice at T = 0.01");
        assert_eq!(lines[1], "e,f");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "e,T,f");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn points_mark_hits() {
        let sample = sample_circle(&CircleParams::default().with_samples(50)).unwrap();
        let s = render(|w| write_points(w, &sample));
        let inside = s.lines().skip(1).filter(|l| l.ends_with(",1")).count();
        assert_eq!(s.lines().count(), 51);
        assert_eq!(inside, sample.hits());
    }

    #[test]
    fn sweep_records() {
        let stats = err_stat(2, &[10, 20]).unwrap();
        let s = render(|w| write_error_statistics(w, &stats));
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines[0], "n,mean,std");
        assert!(lines[1].starts_with("10,"));
        assert!(lines[2].starts_with("20,"));
    }
}
