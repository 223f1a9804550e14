//! `Array`: a one-dimensional vector of reals.
//!
//! This is a thin newtype around `nalgebra::DVector<f64>` used for energy and
//! temperature axes, broadcast evaluation results, and reduced statistics.

use nalgebra::DVector;
use sp_core::Real;
use std::ops::Index;

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Create a zero-filled array of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create an array from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create an array from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// `n` evenly spaced values over `[start, stop]`, both ends included.
    ///
    /// `n == 0` gives an empty array and `n == 1` gives `[start]`.
    pub fn linspace(start: Real, stop: Real, n: usize) -> Self {
        match n {
            0 => Self::zeros(0),
            1 => Self::from_slice(&[start]),
            _ => {
                let step = (stop - start) / (n - 1) as Real;
                let mut v = DVector::from_fn(n, |i, _| start + step * i as Real);
                // pin the endpoint against accumulated rounding
                v[n - 1] = stop;
                Self(v)
            }
        }
    }

    /// `n` values evenly spaced on a log10 scale over `[10^start, 10^stop]`.
    pub fn logspace(start: Real, stop: Real, n: usize) -> Self {
        Self::linspace(start, stop, n).map(|x| 10.0_f64.powf(x))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Real {
        self.0.sum()
    }

    /// Return `true` if every element is finite.
    pub fn all_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }

    /// Apply a function element-wise, returning a new array of the same
    /// length.
    pub fn map<F: Fn(Real) -> Real>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }

    /// Combine two arrays element-wise.
    ///
    /// # Panics
    /// Panics if the lengths differ; callers validate shapes first.
    pub fn zip_map<F: Fn(Real, Real) -> Real>(&self, other: &Array, f: F) -> Self {
        Self(self.0.zip_map(&other.0, f))
    }

    /// Iterator over elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }

    /// Copy the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<Real> {
        self.0.iter().copied().collect()
    }
}

// ── From / Into conversions ───────────────────────────────────────────────────

impl From<Vec<Real>> for Array {
    fn from(v: Vec<Real>) -> Self {
        Self::from_vec(v)
    }
}

impl From<&[Real]> for Array {
    fn from(s: &[Real]) -> Self {
        Self::from_slice(s)
    }
}

impl FromIterator<Real> for Array {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

impl Index<usize> for Array {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice() {
        let a = Array::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(a.len(), 3);
        assert_eq!(a[1], 2.0);
    }

    #[test]
    fn linspace_endpoints() {
        let a = Array::linspace(-1.0, 1.0, 5);
        assert_eq!(a.to_vec(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let a = Array::linspace(0.0, 0.3, 7);
        assert_eq!(a[0], 0.0);
        assert_eq!(a[6], 0.3);

        assert!(Array::linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(Array::linspace(2.0, 5.0, 1).to_vec(), vec![2.0]);
    }

    #[test]
    fn logspace_decades() {
        let a = Array::logspace(0.0, 3.0, 4);
        for (got, want) in a.iter().zip([1.0, 10.0, 100.0, 1000.0]) {
            assert!((got - want).abs() < 1e-9 * want, "{got} vs {want}");
        }
    }

    #[test]
    fn sum_of_elements() {
        let a = Array::from_slice(&[1.0, 5.0, 3.0, 2.0]);
        assert_eq!(a.sum(), 11.0);
        assert_eq!(Array::zeros(0).sum(), 0.0);
    }

    #[test]
    fn map_and_zip_map_preserve_length() {
        let a = Array::from_slice(&[-1.0, 2.0, -3.0]);
        let b = a.map(f64::abs);
        assert_eq!(b.to_vec(), vec![1.0, 2.0, 3.0]);
        let c = a.zip_map(&b, |x, y| x + y);
        assert_eq!(c.to_vec(), vec![0.0, 4.0, 0.0]);
    }

    #[test]
    fn finiteness_and_display() {
        let a: Array = vec![1.0, f64::INFINITY].into();
        assert!(!a.all_finite());
        assert_eq!(a.to_string(), "[1, inf]");
        let b: Array = (0..3).map(|i| i as f64).collect();
        assert!(b.all_finite());
        assert_eq!(b.to_string(), "[0, 1, 2]");
    }
}
