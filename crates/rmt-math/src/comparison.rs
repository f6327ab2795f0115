//! Floating-point comparison utilities.

use rmt_core::Real;

/// Return `true` if `residual` is negligible next to `scale`, i.e.
/// `|residual| <= tolerance * max(1, |scale|)`.
///
/// Used to decide whether the imaginary part of a quantity that should be
/// real (a Hermitian trace, say) is rounding noise.
#[inline]
pub fn negligible(residual: Real, scale: Real, tolerance: Real) -> bool {
    residual.abs() <= tolerance * scale.abs().max(1.0)
}
