//! Marchenko–Pastur law for aspect ratio `c = 1`.
//!
//! The limiting eigenvalue density of `S = X Xᴴ`, with `X` an `N × N`
//! Ginibre matrix whose entries have variance `1/N`, is
//!
//! $$\rho(x) = \frac{\sqrt{4x - x^2}}{2\pi x}, \qquad 0 < x \le 4.$$
//!
//! Its `k`-th moment is the Catalan number `C_k`.

use crate::combinatorics::catalan;
use rmt_core::{Real, Result};
use std::f64::consts::PI;

/// Support `[0, 4]` of the `c = 1` law.
pub const MP_C1_SUPPORT: (Real, Real) = (0.0, 4.0);

/// Marchenko–Pastur density for `c = 1`.
///
/// Returns `sqrt(4x − x²) / (2πx)` on `0 < x ≤ 4` and `0` everywhere else.
/// At `x = 0` the true density diverges like `1/(π√x)`; this function
/// returns `0` there. A NaN input also yields `0`.
///
/// # Example
/// ```
/// use rmt_math::marchenko_pastur_pdf_c1;
/// assert_eq!(marchenko_pastur_pdf_c1(0.0), 0.0);
/// assert_eq!(marchenko_pastur_pdf_c1(4.5), 0.0);
/// let mid = 1.0 / (2.0 * std::f64::consts::PI);
/// assert!((marchenko_pastur_pdf_c1(2.0) - mid).abs() < 1e-15);
/// ```
#[inline]
pub fn marchenko_pastur_pdf_c1(x: Real) -> Real {
    let (lo, hi) = MP_C1_SUPPORT;
    if x > lo && x <= hi {
        (4.0 * x - x * x).sqrt() / (2.0 * PI * x)
    } else {
        0.0
    }
}

/// Evaluate [`marchenko_pastur_pdf_c1`] at every abscissa.
pub fn marchenko_pastur_pdf_c1_grid(xs: &[Real]) -> Vec<Real> {
    xs.iter().map(|&x| marchenko_pastur_pdf_c1(x)).collect()
}

/// `k`-th moment `∫ xᵏ ρ(x) dx` of the `c = 1` law, i.e. the Catalan number
/// `C_k` as a float.
pub fn marchenko_pastur_moment_c1(k: u32) -> Result<Real> {
    Ok(catalan(k)? as Real)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrals::trapezoid_fn;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn edge_policy() {
        assert_eq!(marchenko_pastur_pdf_c1(0.0), 0.0);
        assert_eq!(marchenko_pastur_pdf_c1(-0.5), 0.0);
        assert_eq!(marchenko_pastur_pdf_c1(4.0 + 1e-12), 0.0);
        assert_eq!(marchenko_pastur_pdf_c1(Real::NAN), 0.0);
        // right edge is inside the support with zero density
        assert_abs_diff_eq!(marchenko_pastur_pdf_c1(4.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn known_values() {
        let sqrt3 = 3.0_f64.sqrt();
        assert_abs_diff_eq!(marchenko_pastur_pdf_c1(1.0), sqrt3 / (2.0 * PI), epsilon = 1e-15);
        assert_abs_diff_eq!(marchenko_pastur_pdf_c1(2.0), 1.0 / (2.0 * PI), epsilon = 1e-15);
        assert_abs_diff_eq!(marchenko_pastur_pdf_c1(3.0), sqrt3 / (6.0 * PI), epsilon = 1e-15);
    }

    #[test]
    fn grid_preserves_length() {
        let xs = [-1.0, 0.0, 0.5, 1.0, 4.0, 5.0];
        let ys = marchenko_pastur_pdf_c1_grid(&xs);
        assert_eq!(ys.len(), xs.len());
        assert_eq!(ys[0], 0.0);
        assert_eq!(ys[1], 0.0);
        assert!(ys[2] > 0.0 && ys[3] > 0.0);
        assert_eq!(ys[5], 0.0);
        assert!(marchenko_pastur_pdf_c1_grid(&[]).is_empty());
    }

    #[test]
    fn integrates_to_one() {
        let total = trapezoid_fn(marchenko_pastur_pdf_c1, 0.0, 4.0, 20_001).unwrap();
        // the integrable 1/√x singularity at 0 costs the trapezoid rule ≈ 0.7 %
        assert!((total - 1.0).abs() < 0.02, "∫ρ = {total}");
    }

    #[test]
    fn low_moments_are_catalan() {
        for k in 1..=4u32 {
            let integrand = |x: Real| x.powi(k as i32) * marchenko_pastur_pdf_c1(x);
            let m = trapezoid_fn(integrand, 0.0, 4.0, 20_001).unwrap();
            let expected = marchenko_pastur_moment_c1(k).unwrap();
            assert!((m - expected).abs() / expected < 1e-3, "moment {k}: {m} vs {expected}");
        }
        assert_eq!(marchenko_pastur_moment_c1(5).unwrap(), 42.0);
    }

    proptest! {
        #[test]
        fn zero_outside_support(x in prop_oneof![-1e6..=0.0f64, 4.000_001..1e6f64]) {
            prop_assert_eq!(marchenko_pastur_pdf_c1(x), 0.0);
        }

        #[test]
        fn positive_inside_support(x in 1e-9..4.0f64) {
            prop_assert!(marchenko_pastur_pdf_c1(x) > 0.0);
        }
    }
}
