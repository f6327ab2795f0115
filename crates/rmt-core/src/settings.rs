//! Simulation settings.
//!
//! [`SimulationConfig`] is the `(N, trials)` pair that bounds every
//! simulator loop. [`MomentConfig`] adds the range of matrix powers and the
//! normalization used by the trace-moment experiment. [`Settings`] bundles
//! the hard-coded experiment defaults consumed by the `rmt` binary.
//!
//! Settings are plain values passed explicitly; there is no process-wide
//! singleton. The random source is likewise handed to each simulator by the
//! caller, so a seed here is only a default for the driver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ensure,
    errors::{Error, Result},
    Real, Seed, Size,
};

// ─── SimulationConfig ─────────────────────────────────────────────────────────

/// Matrix dimension and number of Monte Carlo trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    dimension: Size,
    trials: Size,
}

impl SimulationConfig {
    /// Create a configuration for `trials` samples of `dimension × dimension`
    /// matrices.
    ///
    /// Both values must be positive.
    pub fn new(dimension: Size, trials: Size) -> Result<Self> {
        let config = Self { dimension, trials };
        config.validate()?;
        Ok(config)
    }

    /// Matrix dimension `N`.
    pub fn dimension(&self) -> Size {
        self.dimension
    }

    /// Number of independent trials.
    pub fn trials(&self) -> Size {
        self.trials
    }

    /// Total number of eigenvalues an eigenvalue run produces (`N × trials`).
    ///
    /// Saturates at `usize::MAX`; [`validate`](Self::validate) rejects such
    /// configurations.
    pub fn sample_count(&self) -> Size {
        self.dimension.saturating_mul(self.trials)
    }

    /// Re-check the invariants. Deserialized values bypass [`new`](Self::new),
    /// so simulators call this on entry.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.dimension > 0,
            "matrix dimension must be positive, got {}",
            self.dimension
        );
        ensure!(
            self.trials > 0,
            "number of trials must be positive, got {}",
            self.trials
        );
        self.dimension.checked_mul(self.trials).ok_or_else(|| {
            Error::Overflow(format!(
                "{} eigenvalues per trial times {} trials overflows usize",
                self.dimension, self.trials
            ))
        })?;
        Ok(())
    }
}

// ─── MomentNormalization ──────────────────────────────────────────────────────

/// How a trial-averaged trace `E[Tr(S^k)]` is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MomentNormalization {
    /// The raw mean `E[Tr(S^k)]`, which grows linearly with `N`.
    #[default]
    Raw,
    /// `E[Tr(S^k)] / N`, which converges to the Catalan number `C_k`.
    PerDimension,
}

impl MomentNormalization {
    /// Apply the normalization to a trace computed for an `n × n` matrix.
    pub fn apply(self, trace: Real, n: Size) -> Real {
        match self {
            MomentNormalization::Raw => trace,
            MomentNormalization::PerDimension => trace / n as Real,
        }
    }

    /// Label used when printing a moment, e.g. `E[Tr(S^3)]/N`.
    pub fn label(self, power: u32) -> String {
        match self {
            MomentNormalization::Raw => format!("E[Tr(S^{power})]"),
            MomentNormalization::PerDimension => format!("E[Tr(S^{power})]/N"),
        }
    }
}

// ─── MomentConfig ─────────────────────────────────────────────────────────────

/// Configuration of the trace-moment experiment: powers `1..=max_power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MomentConfig {
    /// Matrix dimension and trial count shared by every power.
    pub simulation: SimulationConfig,
    /// Largest power `k` to estimate.
    pub max_power: u32,
    /// Reporting normalization.
    pub normalization: MomentNormalization,
}

impl MomentConfig {
    /// Create a moment configuration. `max_power` must be at least 1.
    pub fn new(
        simulation: SimulationConfig,
        max_power: u32,
        normalization: MomentNormalization,
    ) -> Result<Self> {
        ensure!(max_power >= 1, "maximum power must be at least 1, got {max_power}");
        Ok(Self {
            simulation,
            max_power,
            normalization,
        })
    }

    /// The powers `1..=max_power`.
    pub fn powers(&self) -> impl Iterator<Item = u32> {
        1..=self.max_power
    }
}

// ─── DensityGrid ──────────────────────────────────────────────────────────────

/// A uniform grid `linspace(start, end, points)` on which the theoretical
/// density curve is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DensityGrid {
    /// First abscissa.
    pub start: Real,
    /// Last abscissa (inclusive).
    pub end: Real,
    /// Number of points, at least 2.
    pub points: Size,
}

impl DensityGrid {
    /// Materialize the grid, endpoints included.
    pub fn abscissae(&self) -> Result<Vec<Real>> {
        ensure!(self.points >= 2, "density grid needs at least 2 points, got {}", self.points);
        ensure!(
            self.end > self.start,
            "density grid end ({}) must exceed start ({})",
            self.end,
            self.start
        );
        let h = (self.end - self.start) / (self.points - 1) as Real;
        Ok((0..self.points)
            .map(|i| {
                if i + 1 == self.points {
                    self.end
                } else {
                    self.start + i as Real * h
                }
            })
            .collect())
    }
}

// ─── Settings ─────────────────────────────────────────────────────────────────

/// Experiment defaults for the `rmt` driver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Seed for the random stream; `None` draws one from OS entropy.
    pub seed: Option<Seed>,
    /// `(N, trials)` pairs for the eigenvalue-density experiment.
    pub eigenvalue_configs: Vec<SimulationConfig>,
    /// Number of histogram bins for the empirical density.
    pub density_bins: Size,
    /// Grid for the theoretical Marchenko–Pastur curve.
    pub density_grid: DensityGrid,
    /// Trace-moment experiment.
    pub moments: MomentConfig,
}

impl Default for Settings {
    fn default() -> Self {
        let eigenvalue_configs = [(10, 20), (20, 50), (50, 100), (100, 200)]
            .into_iter()
            .map(|(dimension, trials)| SimulationConfig { dimension, trials })
            .collect();
        Self {
            seed: None,
            eigenvalue_configs,
            density_bins: 80,
            density_grid: DensityGrid {
                start: 0.01,
                end: 4.0,
                points: 500,
            },
            moments: MomentConfig {
                simulation: SimulationConfig {
                    dimension: 100,
                    trials: 1000,
                },
                max_power: 5,
                normalization: MomentNormalization::Raw,
            },
        }
    }
}
