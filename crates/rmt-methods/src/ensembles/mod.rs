//! Random matrix ensembles.
//!
//! * [`ginibre`] — `N × N` complex Ginibre matrix with `E|xᵢⱼ|² = 1/N`
//! * [`sample_covariance`] — `S = X Xᴴ`, Hermitian positive semi-definite
//! * [`wishart`] — the two composed: one `c = 1` Wishart sample

use rand::Rng;
use rand_distr::Distribution;
use rmt_core::{ensure, Complex, Real, Result, Size};
use rmt_math::{gaussian, ComplexMatrix};

/// Draw an `n × n` complex Ginibre matrix.
///
/// Every entry is `re + i·im` with `re`, `im` independent `N(0, 1/(2n))`,
/// so each entry has total variance `1/n`. Entries are drawn in storage
/// (column-major) order, real part first.
pub fn ginibre<R: Rng + ?Sized>(n: Size, rng: &mut R) -> Result<ComplexMatrix> {
    ensure!(n > 0, "Ginibre dimension must be positive, got {n}");
    let normal = gaussian(1.0 / (2.0 * n as Real).sqrt())?;
    Ok(ComplexMatrix::from_fn(n, n, |_, _| {
        let re = normal.sample(&mut *rng);
        let im = normal.sample(&mut *rng);
        Complex::new(re, im)
    }))
}

/// Sample covariance `S = X Xᴴ` of a square matrix `X`.
pub fn sample_covariance(x: &ComplexMatrix) -> Result<ComplexMatrix> {
    ensure!(
        x.is_square() && x.rows() > 0,
        "sample covariance needs a non-empty square matrix, got {}×{}",
        x.rows(),
        x.cols()
    );
    Ok(x * &x.adjoint())
}

/// One `n × n` Wishart sample `X Xᴴ` with `X` Ginibre.
pub fn wishart<R: Rng + ?Sized>(n: Size, rng: &mut R) -> Result<ComplexMatrix> {
    sample_covariance(&ginibre(n, rng)?)
}
