//! `ComplexMatrix` — a dense matrix of complex numbers.
//!
//! This is a thin newtype around `nalgebra::DMatrix<Complex64>` exposing the
//! handful of operations the simulators need: conjugate transpose, products,
//! integer powers, trace, and the Hermitian eigensolver.

use nalgebra::DMatrix;
use rmt_core::{ensure, Complex, Real, Result, Size};
use std::ops::{Index, Mul};

/// A dynamically-sized 2D matrix of `Complex` values.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexMatrix(DMatrix<Complex>);

impl ComplexMatrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: Size, cols: Size) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create an identity matrix of size `n × n`.
    pub fn identity(n: Size) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Build a matrix by calling `f(i, j)` for every entry.
    pub fn from_fn<F: FnMut(Size, Size) -> Complex>(rows: Size, cols: Size, f: F) -> Self {
        Self(DMatrix::from_fn(rows, cols, f))
    }

    /// Create from a row-major data slice.
    pub fn from_row_slice(rows: Size, cols: Size, data: &[Complex]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Number of rows.
    pub fn rows(&self) -> Size {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> Size {
        self.0.ncols()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Complex> {
        &self.0
    }

    /// Conjugate transpose `Mᴴ`.
    pub fn adjoint(&self) -> Self {
        Self(self.0.adjoint())
    }

    /// Trace (sum of diagonal elements).
    pub fn trace(&self) -> Complex {
        self.0.trace()
    }

    /// Frobenius norm.
    pub fn norm(&self) -> Real {
        self.0.norm()
    }

    /// Relative Hermiticity defect `‖M − Mᴴ‖_F / ‖M‖_F`.
    ///
    /// Zero for an exactly Hermitian matrix; `0.0` for the zero matrix.
    pub fn hermitian_defect(&self) -> Real {
        let scale = self.norm();
        if scale == 0.0 {
            return 0.0;
        }
        (&self.0 - self.0.adjoint()).norm() / scale
    }

    /// Integer power `Mᵏ` by repeated multiplication (`k − 1` products).
    ///
    /// `k = 0` yields the identity.
    pub fn power(&self, k: u32) -> Result<Self> {
        ensure!(
            self.is_square(),
            "matrix power needs a square matrix, got {}×{}",
            self.rows(),
            self.cols()
        );
        if k == 0 {
            return Ok(Self::identity(self.rows()));
        }
        let mut acc = self.0.clone();
        for _ in 1..k {
            acc = &acc * &self.0;
        }
        Ok(Self(acc))
    }

    /// Eigenvalues of a Hermitian matrix, in ascending order.
    ///
    /// Uses nalgebra's symmetric (Hermitian) eigensolver, which only reads
    /// the lower triangle and returns real eigenvalues by construction.
    pub fn hermitian_eigenvalues(&self) -> Result<Vec<Real>> {
        ensure!(
            self.is_square(),
            "eigenvalues need a square matrix, got {}×{}",
            self.rows(),
            self.cols()
        );
        ensure!(self.rows() > 0, "eigenvalues of an empty matrix are undefined");
        let mut values: Vec<Real> = self.0.symmetric_eigenvalues().iter().copied().collect();
        values.sort_by(|a, b| a.total_cmp(b));
        Ok(values)
    }
}

// ── From / Into ───────────────────────────────────────────────────────────────

impl From<DMatrix<Complex>> for ComplexMatrix {
    fn from(m: DMatrix<Complex>) -> Self {
        Self(m)
    }
}

impl From<ComplexMatrix> for DMatrix<Complex> {
    fn from(m: ComplexMatrix) -> Self {
        m.0
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl Index<(Size, Size)> for ComplexMatrix {
    type Output = Complex;

    fn index(&self, (i, j): (Size, Size)) -> &Complex {
        &self.0[(i, j)]
    }
}

impl<'a> Mul<&'a ComplexMatrix> for &'a ComplexMatrix {
    type Output = ComplexMatrix;

    fn mul(self, rhs: &'a ComplexMatrix) -> ComplexMatrix {
        ComplexMatrix(&self.0 * &rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(re: Real, im: Real) -> Complex {
        Complex::new(re, im)
    }

    fn sample() -> ComplexMatrix {
        ComplexMatrix::from_row_slice(
            2,
            2,
            &[c(1.0, 2.0), c(0.0, -1.0), c(3.0, 0.0), c(-2.0, 1.0)],
        )
    }

    #[test]
    fn adjoint_conjugates_and_transposes() {
        let a = sample().adjoint();
        assert_eq!(a[(0, 0)], c(1.0, -2.0));
        assert_eq!(a[(0, 1)], c(3.0, 0.0));
        assert_eq!(a[(1, 0)], c(0.0, 1.0));
        assert_eq!(a[(1, 1)], c(-2.0, -1.0));
    }

    #[test]
    fn gram_matrix_is_hermitian() {
        let x = sample();
        let s = &x * &x.adjoint();
        assert!(s.hermitian_defect() < 1e-14);
        // diagonal of X Xᴴ holds squared row norms
        assert_abs_diff_eq!(s[(0, 0)].re, 6.0, epsilon = 1e-14);
        assert_abs_diff_eq!(s[(1, 1)].re, 14.0, epsilon = 1e-14);
        assert_abs_diff_eq!(s.trace().im, 0.0, epsilon = 1e-14);
        assert!(x.hermitian_defect() > 0.1);
    }

    #[test]
    fn power_by_repeated_multiplication() {
        let x = sample();
        let p3 = x.power(3).unwrap();
        let manual = &(&x * &x) * &x;
        assert_eq!(p3, manual);
        assert_eq!(x.power(1).unwrap(), x);
        assert_eq!(x.power(0).unwrap(), ComplexMatrix::identity(2));
        assert!(ComplexMatrix::zeros(2, 3).power(2).is_err());
    }

    #[test]
    fn hermitian_eigenvalues_of_known_matrix() {
        // [[2, i], [-i, 2]] has eigenvalues 1 and 3
        let h = ComplexMatrix::from_row_slice(
            2,
            2,
            &[c(2.0, 0.0), c(0.0, 1.0), c(0.0, -1.0), c(2.0, 0.0)],
        );
        let eigs = h.hermitian_eigenvalues().unwrap();
        assert_eq!(eigs.len(), 2);
        assert_abs_diff_eq!(eigs[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eigs[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn eigenvalues_need_square_nonempty() {
        assert!(ComplexMatrix::zeros(2, 3).hermitian_eigenvalues().is_err());
        assert!(ComplexMatrix::zeros(0, 0).hermitian_eigenvalues().is_err());
    }

    #[test]
    fn zero_matrix_defect_is_zero() {
        assert_eq!(ComplexMatrix::zeros(3, 3).hermitian_defect(), 0.0);
    }
}
