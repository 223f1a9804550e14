//! `Grid`: a two-dimensional table of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>`.  It holds the
//! temperature × energy surface of an occupation function and the
//! seed × sample-size error table of a Monte Carlo sweep.

use crate::array::Array;
use nalgebra::DMatrix;
use sp_core::Real;
use std::ops::Index;

/// A dynamically-sized 2D table of `Real` values, indexed `(row, col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(DMatrix<Real>);

impl Grid {
    /// Create a zero-filled `rows × cols` grid.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create from a row-major data slice.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F: FnMut(usize, usize) -> Real>(rows: usize, cols: usize, f: F) -> Self {
        Self(DMatrix::from_fn(rows, cols, f))
    }

    /// Build a grid from a function of each cell's `(row, col)` that may
    /// fail; the first error is returned.
    pub fn try_from_fn<E, F>(rows: usize, cols: usize, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize, usize) -> Result<Real, E>,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j)?);
            }
        }
        Ok(Self::from_row_slice(rows, cols, &data))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// Copy row `i` into an `Array`.
    pub fn row(&self, i: usize) -> Array {
        self.0.row(i).iter().copied().collect()
    }

    /// Copy column `j` into an `Array`.
    pub fn column(&self, j: usize) -> Array {
        self.0.column(j).iter().copied().collect()
    }

    /// Return `true` if every cell is finite.
    pub fn all_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_layout() {
        let g = Grid::from_fn(2, 3, |i, j| (10 * i + j) as Real);
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g[(1, 2)], 12.0);
        assert_eq!(g.row(1).to_vec(), vec![10.0, 11.0, 12.0]);
        assert_eq!(g.column(0).to_vec(), vec![0.0, 10.0]);
    }

    #[test]
    fn row_slice_matches_from_fn() {
        let a = Grid::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Grid::from_fn(2, 2, |i, j| (2 * i + j + 1) as Real);
        assert_eq!(a, b);
    }

    #[test]
    fn try_from_fn_stops_at_first_error() {
        let mut calls = 0;
        let r: Result<Grid, String> = Grid::try_from_fn(3, 3, |i, j| {
            calls += 1;
            if i == 1 && j == 1 {
                Err(format!("bad cell ({i}, {j})"))
            } else {
                Ok(0.0)
            }
        });
        assert_eq!(r, Err("bad cell (1, 1)".to_string()));
        assert_eq!(calls, 5);
    }

    #[test]
    fn finiteness() {
        let mut g = Grid::zeros(2, 2);
        assert!(g.all_finite());
        g = Grid::from_row_slice(1, 2, &[1.0, f64::NAN]);
        assert!(!g.all_finite());
    }
}
