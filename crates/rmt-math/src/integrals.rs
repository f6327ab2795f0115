//! Discrete integration rules.
//!
//! The density checks only need the composite trapezoid rule, either over
//! tabulated `(x, f(x))` data (histograms, curves on a grid) or over a
//! function sampled on a uniform grid.

use rmt_core::{ensure, Real, Result};

/// Composite trapezoid rule over tabulated data.
///
/// Given abscissae `x[0..n]` and ordinates `f[0..n]`, returns
///
/// $$\sum_{i=0}^{n-2} \tfrac12 (x_{i+1}-x_i)(f_i + f_{i+1}).$$
///
/// Fewer than two points integrate to zero.
pub fn trapezoid(x: &[Real], f: &[Real]) -> Result<Real> {
    ensure!(
        x.len() == f.len(),
        "abscissae and ordinates differ in length ({} vs {})",
        x.len(),
        f.len()
    );
    Ok(x
        .windows(2)
        .zip(f.windows(2))
        .map(|(xs, fs)| 0.5 * (xs[1] - xs[0]) * (fs[0] + fs[1]))
        .sum())
}

/// Composite trapezoid rule for `f` on `[a, b]` with `n` uniformly spaced
/// evaluation points (endpoints included).
pub fn trapezoid_fn<F: Fn(Real) -> Real>(f: F, a: Real, b: Real, n: usize) -> Result<Real> {
    ensure!(n >= 2, "need at least 2 evaluation points, got {n}");
    let h = (b - a) / (n - 1) as Real;
    let interior: Real = (1..n - 1).map(|i| f(a + i as Real * h)).sum();
    Ok((0.5 * (f(a) + f(b)) + interior) * h)
}
