//! # rmt-core
//!
//! Core types, error definitions, and simulation settings for rmt-rs.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace: scalar type aliases, the error hierarchy
//! with its `ensure!` / `ensure_post!` / `fail!` macros, and the
//! configuration types that drive the simulators.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` / `ensure_post!` macros.
pub mod errors;

/// Simulation configuration (matrix dimension, trial counts, defaults).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Complex scalar type used for matrix entries.
pub type Complex = num_complex::Complex64;

/// Alias used for matrix dimensions, trial counts, and indices.
pub type Size = usize;

/// Seed for a pseudo-random stream.
pub type Seed = u64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{MomentConfig, MomentNormalization, Settings, SimulationConfig};
