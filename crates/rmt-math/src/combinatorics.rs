//! Exact integer combinatorics.
//!
//! Everything here stays in integer arithmetic. Overflow is reported as
//! [`Error::Overflow`] rather than wrapped or rounded through `f64`.

use num_traits::PrimInt;
use rmt_core::{errors::Error, Result};

/// Binomial coefficient `C(n, k)` in the integer type `T`.
///
/// Uses the multiplicative recurrence `C(m, i) = C(m − 1, i − 1) · m / i`,
/// cancelling the common factor before multiplying so every intermediate is
/// an exact integer bounded by the result.
/// Returns zero when `k > n`.
///
/// # Example
/// ```
/// use rmt_math::binomial;
/// assert_eq!(binomial::<u64>(10, 3).unwrap(), 120);
/// assert_eq!(binomial::<u64>(3, 10).unwrap(), 0);
/// ```
pub fn binomial<T: PrimInt>(n: u32, k: u32) -> Result<T> {
    if k > n {
        return Ok(T::zero());
    }
    let k = k.min(n - k);
    let mut acc = T::one();
    for i in 1..=k {
        let factor = cast::<T>(n - k + i)?;
        let divisor = cast::<T>(i)?;
        // acc · factor is divisible by i; split i between the two operands
        let g = gcd(acc, divisor);
        let acc_part = acc / g;
        let factor_part = factor / (divisor / g);
        acc = acc_part
            .checked_mul(&factor_part)
            .ok_or_else(|| Error::Overflow(format!("binomial({n}, {k}) exceeds the target type")))?;
    }
    Ok(acc)
}

/// The `k`-th Catalan number `C_k = C(2k, k) / (k + 1)`, computed exactly.
///
/// `u128` holds every Catalan number up to `k = 65`; larger `k` returns
/// [`Error::Overflow`].
///
/// # Example
/// ```
/// use rmt_math::catalan;
/// let first: Vec<u128> = (0..=5).map(|k| catalan(k).unwrap()).collect();
/// assert_eq!(first, vec![1, 1, 2, 5, 14, 42]);
/// ```
pub fn catalan(k: u32) -> Result<u128> {
    let two_k = k
        .checked_mul(2)
        .ok_or_else(|| Error::Overflow(format!("2k overflows u32 for k = {k}")))?;
    let central = binomial::<u128>(two_k, k)?;
    let divisor = u128::from(k) + 1;
    debug_assert_eq!(central % divisor, 0);
    Ok(central / divisor)
}

fn cast<T: PrimInt>(v: u32) -> Result<T> {
    T::from(v).ok_or_else(|| Error::Overflow(format!("{v} does not fit the target type")))
}

fn gcd<T: PrimInt>(mut a: T, mut b: T) -> T {
    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
