//! # rmt
//!
//! Monte Carlo validation of two random matrix theory results for complex
//! Wishart matrices `S = X Xᴴ` with `X` an `N × N` Ginibre matrix:
//!
//! * the eigenvalue density of `S` approaches the Marchenko–Pastur law
//!   `ρ(x) = √(4x − x²) / (2πx)` on `[0, 4]`;
//! * `E[Tr(Sᵏ)] / N` approaches the Catalan number `C_k`.
//!
//! This crate is a **façade** re-exporting the workspace crates, plus the
//! small [`report`] layer used by the `rmt` binary.
//!
//! ## Quick start
//!
//! ```rust
//! use rmt::core::{MomentNormalization, SimulationConfig};
//! use rmt::math::RandomStream;
//! use rmt::methods::{EigenvalueSimulator, TraceMomentSimulator};
//!
//! let config = SimulationConfig::new(8, 4).unwrap();
//! let mut rng = RandomStream::new(42);
//!
//! let eigs = EigenvalueSimulator::new(config).simulate(&mut rng).unwrap();
//! assert_eq!(eigs.len(), 32);
//!
//! let m2 = TraceMomentSimulator::new(config, 2)
//!     .unwrap()
//!     .simulate(MomentNormalization::PerDimension, &mut rng)
//!     .unwrap();
//! assert!(m2.mean > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, error definitions, and settings.
pub use rmt_core as core;

/// Complex matrices, random streams, combinatorics, densities, statistics.
pub use rmt_math as math;

/// Ensembles and Monte Carlo simulators.
pub use rmt_methods as methods;

/// Text rendering of simulation results.
pub mod report;
