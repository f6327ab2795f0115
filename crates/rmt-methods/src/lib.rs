//! # rmt-methods
//!
//! Random matrix ensembles and the Monte Carlo simulators built on them.
//!
//! # Modules
//!
//! * [`ensembles`] — Ginibre generator and sample covariance (Wishart) builder
//! * [`monte_carlo`] — eigenvalue pooling and trace-moment estimation

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Ginibre and Wishart ensembles.
pub mod ensembles;

/// Monte Carlo simulators: eigenvalue collections and trace moments.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use ensembles::{ginibre, sample_covariance, wishart};
pub use monte_carlo::{
    trace_moment_sweep, trace_moment_sweep_parallel, EigenvalueSimulator, MomentEstimate,
    TraceMomentSimulator, IMAGINARY_TRACE_TOLERANCE,
};
