//! Monte Carlo spectral simulators.
//!
//! # Overview
//!
//! * [`EigenvalueSimulator`] — pools the eigenvalues of `trials` independent
//!   Wishart samples into one flat collection
//! * [`TraceMomentSimulator`] — trial-averaged `Tr(Sᵏ)`, raw or divided by `N`
//! * [`MomentEstimate`] — the result of a trace-moment run
//! * [`trace_moment_sweep`] — the moment experiment for `k = 1..=max_power`
//!
//! Each simulator runs in one of three ways:
//!
//! * `simulate(&mut rng)` threads a single caller-supplied stream through
//!   every trial, sequentially.
//! * `simulate_per_trial_streams(seed)` gives trial `t` its own stream
//!   [`RandomStream::for_trial`]`(seed, t)`, sequentially.
//! * `simulate_parallel(seed)` uses the same per-trial streams on the rayon
//!   pool. Results are gathered in trial order, so it is bit-identical to
//!   the per-trial sequential run regardless of thread count.

use log::{debug, trace};
use rand::Rng;
use rayon::prelude::*;
use rmt_core::{
    ensure, ensure_post, MomentConfig, MomentNormalization, Real, Result, Seed, SimulationConfig,
    Size,
};
use rmt_math::comparison::negligible;
use rmt_math::{catalan, RandomStream, Statistics};

use crate::ensembles::wishart;

/// Relative tolerance on the imaginary part of `Tr(Sᵏ)` before it is
/// treated as an error instead of rounding noise.
pub const IMAGINARY_TRACE_TOLERANCE: Real = 1e-8;

// ─── Trial kernels ────────────────────────────────────────────────────────────

fn trial_eigenvalues<R: Rng + ?Sized>(n: Size, rng: &mut R) -> Result<Vec<Real>> {
    wishart(n, rng)?.hermitian_eigenvalues()
}

fn trial_trace<R: Rng + ?Sized>(n: Size, power: u32, rng: &mut R) -> Result<Real> {
    let tr = wishart(n, rng)?.power(power)?.trace();
    ensure_post!(
        negligible(tr.im, tr.re, IMAGINARY_TRACE_TOLERANCE),
        "Tr(S^{power}) = {} + {}i has a non-negligible imaginary part",
        tr.re,
        tr.im
    );
    Ok(tr.re)
}

/// Run `kernel` once per trial with the per-trial streams of `base_seed`,
/// returning results in trial order.
fn per_trial<T, F>(trials: Size, base_seed: Seed, parallel: bool, kernel: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&mut RandomStream) -> Result<T> + Sync,
{
    let run = |t: Size| {
        let mut rng = RandomStream::for_trial(base_seed, t);
        trace!("trial {t}: stream seed {}", rng.seed());
        kernel(&mut rng)
    };
    if parallel {
        (0..trials).into_par_iter().map(run).collect()
    } else {
        (0..trials).map(run).collect()
    }
}

// ─── EigenvalueSimulator ──────────────────────────────────────────────────────

/// Collects every eigenvalue of `S = X Xᴴ` over `trials` independent Ginibre
/// draws `X`.
///
/// The output always holds exactly `N × trials` values, `N` per trial in
/// trial order, each trial's block in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenvalueSimulator {
    config: SimulationConfig,
}

impl EigenvalueSimulator {
    /// Create a simulator for the given `(N, trials)`.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The `(N, trials)` configuration.
    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    /// Run all trials sequentially on one stream.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Real>> {
        self.config.validate()?;
        let n = self.config.dimension();
        debug!(
            "eigenvalue simulation: N = {n}, trials = {}",
            self.config.trials()
        );
        let mut all = Vec::with_capacity(self.config.sample_count());
        for t in 0..self.config.trials() {
            all.extend(trial_eigenvalues(n, rng)?);
            trace!("trial {t}: {} eigenvalues collected", all.len());
        }
        Ok(all)
    }

    /// Run all trials sequentially, trial `t` on its own stream.
    pub fn simulate_per_trial_streams(&self, base_seed: Seed) -> Result<Vec<Real>> {
        self.run_per_trial(base_seed, false)
    }

    /// Run the trials on the rayon pool, trial `t` on its own stream.
    pub fn simulate_parallel(&self, base_seed: Seed) -> Result<Vec<Real>> {
        self.run_per_trial(base_seed, true)
    }

    fn run_per_trial(&self, base_seed: Seed, parallel: bool) -> Result<Vec<Real>> {
        self.config.validate()?;
        let n = self.config.dimension();
        debug!(
            "eigenvalue simulation: N = {n}, trials = {}, base seed {base_seed}, parallel = {parallel}",
            self.config.trials()
        );
        let blocks = per_trial(self.config.trials(), base_seed, parallel, |rng| {
            trial_eigenvalues(n, rng)
        })?;
        Ok(blocks.into_iter().flatten().collect())
    }
}

// ─── MomentEstimate ───────────────────────────────────────────────────────────

/// Trial-averaged trace moment for one `(N, k)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentEstimate {
    /// Matrix power `k`.
    pub power: u32,
    /// Matrix dimension `N`.
    pub dimension: Size,
    /// Number of trials averaged.
    pub trials: Size,
    /// Normalization applied to `mean` and `std_error`.
    pub normalization: MomentNormalization,
    /// `E[Tr(Sᵏ)]`, or `E[Tr(Sᵏ)] / N`.
    pub mean: Real,
    /// Monte Carlo standard error of `mean`; `None` for a single trial.
    pub std_error: Option<Real>,
}

impl MomentEstimate {
    /// The Catalan number `C_k` this estimate converges to as `N → ∞`.
    ///
    /// Only meaningful for [`MomentNormalization::PerDimension`].
    pub fn catalan_target(&self) -> Result<Real> {
        ensure!(
            self.normalization == MomentNormalization::PerDimension,
            "raw trace moments grow with N and have no Catalan limit"
        );
        Ok(catalan(self.power)? as Real)
    }

    /// Signed gap `mean − C_k`.
    pub fn catalan_gap(&self) -> Result<Real> {
        Ok(self.mean - self.catalan_target()?)
    }

    fn from_traces(
        traces: impl IntoIterator<Item = Real>,
        power: u32,
        dimension: Size,
        normalization: MomentNormalization,
    ) -> Result<Self> {
        let stats: Statistics = traces
            .into_iter()
            .map(|tr| normalization.apply(tr, dimension))
            .collect();
        let Some(mean) = stats.mean() else {
            rmt_core::fail!("trace moment averaged over zero trials");
        };
        Ok(Self {
            power,
            dimension,
            trials: stats.samples(),
            normalization,
            mean,
            std_error: stats.error_estimate(),
        })
    }
}

// ─── TraceMomentSimulator ─────────────────────────────────────────────────────

/// Estimates `E[Tr(Sᵏ)]` for `S = X Xᴴ`, `X` Ginibre.
///
/// `Sᵏ` is formed by `k − 1` repeated multiplications. The trace's imaginary
/// part must be negligible (see [`IMAGINARY_TRACE_TOLERANCE`]); otherwise the
/// run fails with a postcondition error instead of silently dropping it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceMomentSimulator {
    config: SimulationConfig,
    power: u32,
}

impl TraceMomentSimulator {
    /// Create a simulator for power `k ≥ 1`.
    pub fn new(config: SimulationConfig, power: u32) -> Result<Self> {
        ensure!(power >= 1, "matrix power must be at least 1, got {power}");
        Ok(Self { config, power })
    }

    /// The `(N, trials)` configuration.
    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    /// The matrix power `k`.
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Run all trials sequentially on one stream.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        normalization: MomentNormalization,
        rng: &mut R,
    ) -> Result<MomentEstimate> {
        self.config.validate()?;
        let n = self.config.dimension();
        debug!(
            "trace moment k = {}: N = {n}, trials = {}",
            self.power,
            self.config.trials()
        );
        let mut traces = Vec::with_capacity(self.config.trials());
        for t in 0..self.config.trials() {
            let tr = trial_trace(n, self.power, rng)?;
            trace!("trial {t}: Tr(S^{}) = {tr}", self.power);
            traces.push(tr);
        }
        MomentEstimate::from_traces(traces, self.power, n, normalization)
    }

    /// Run all trials sequentially, trial `t` on its own stream.
    pub fn simulate_per_trial_streams(
        &self,
        normalization: MomentNormalization,
        base_seed: Seed,
    ) -> Result<MomentEstimate> {
        self.run_per_trial(normalization, base_seed, false)
    }

    /// Run the trials on the rayon pool, trial `t` on its own stream.
    pub fn simulate_parallel(
        &self,
        normalization: MomentNormalization,
        base_seed: Seed,
    ) -> Result<MomentEstimate> {
        self.run_per_trial(normalization, base_seed, true)
    }

    fn run_per_trial(
        &self,
        normalization: MomentNormalization,
        base_seed: Seed,
        parallel: bool,
    ) -> Result<MomentEstimate> {
        self.config.validate()?;
        let n = self.config.dimension();
        let power = self.power;
        debug!(
            "trace moment k = {power}: N = {n}, trials = {}, base seed {base_seed}, parallel = {parallel}",
            self.config.trials()
        );
        let traces = per_trial(self.config.trials(), base_seed, parallel, |rng| {
            trial_trace(n, power, rng)
        })?;
        MomentEstimate::from_traces(traces, power, n, normalization)
    }
}

/// Estimate the moments `k = 1..=max_power` one after another, each with its
/// own `trials` fresh samples drawn from `rng`.
pub fn trace_moment_sweep<R: Rng + ?Sized>(
    config: &MomentConfig,
    rng: &mut R,
) -> Result<Vec<MomentEstimate>> {
    config
        .powers()
        .map(|k| {
            TraceMomentSimulator::new(config.simulation, k)?
                .simulate(config.normalization, &mut *rng)
        })
        .collect()
}

/// Parallel counterpart of [`trace_moment_sweep`]. Power `k` uses base seed
/// `seed + k`, so the sweep is reproducible from one seed.
pub fn trace_moment_sweep_parallel(config: &MomentConfig, seed: Seed) -> Result<Vec<MomentEstimate>> {
    config
        .powers()
        .map(|k| {
            TraceMomentSimulator::new(config.simulation, k)?
                .simulate_parallel(config.normalization, seed.wrapping_add(u64::from(k)))
        })
        .collect()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
