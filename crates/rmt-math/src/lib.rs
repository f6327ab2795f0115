//! # rmt-math
//!
//! Mathematical building blocks for the random-matrix simulators: a complex
//! matrix newtype over nalgebra, seedable random streams, exact
//! combinatorics, the Marchenko–Pastur density, discrete integration, and
//! statistics accumulators.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Exact integer combinatorics (binomial coefficients, Catalan numbers).
pub mod combinatorics;

/// Floating-point comparison utilities.
pub mod comparison;

/// Theoretical spectral densities.
pub mod distributions;

/// Discrete integration rules.
pub mod integrals;

/// Dense complex matrices.
pub mod matrix;

/// Seedable random streams.
pub mod random_numbers;

/// Statistics accumulators and density histograms.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use combinatorics::{binomial, catalan};
pub use comparison::negligible;
pub use distributions::{
    marchenko_pastur_moment_c1, marchenko_pastur_pdf_c1, marchenko_pastur_pdf_c1_grid,
    MP_C1_SUPPORT,
};
pub use integrals::{trapezoid, trapezoid_fn};
pub use matrix::ComplexMatrix;
pub use random_numbers::{gaussian, RandomStream};
pub use statistics::{DensityHistogram, Statistics};
