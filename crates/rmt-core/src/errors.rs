//! Error types for rmt-rs.
//!
//! A single `thiserror`-derived enum covers every failure the simulators can
//! report. Precondition checks on public entry points go through the
//! [`ensure!`](crate::ensure) macro; checks on computed results go through
//! [`ensure_post!`](crate::ensure_post).

use thiserror::Error;

/// The top-level error type used throughout rmt-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (bad dimension, zero trials, zero power, ...).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated (e.g. a trace with a non-negligible imaginary
    /// part).
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Invalid argument passed through to a third-party routine.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Exact integer arithmetic would overflow the target type.
    #[error("integer overflow: {0}")]
    Overflow(String),
}

/// Shorthand `Result` type used throughout rmt-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rmt_core::{ensure, errors::Error};
/// fn positive(n: usize) -> rmt_core::errors::Result<usize> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rmt_core::{ensure_post, errors::Error};
/// fn compute(x: f64) -> rmt_core::errors::Result<f64> {
///     let result = x * 2.0;
///     ensure_post!(result > 0.0, "result must be positive, got {result}");
///     Ok(result)
/// }
/// assert!(compute(1.0).is_ok());
/// assert!(compute(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use rmt_core::{fail, errors::Error};
/// fn always_err() -> rmt_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
