//! Text rendering of simulation results.
//!
//! Plotting is left to external tools; this module reduces each experiment
//! to the numbers a plot would show (histogram bars, the theoretical curve,
//! their distance) and formats them for the console.

use std::fmt::Write;

use rmt_core::{settings::DensityGrid, Real, Result, SimulationConfig, Size};
use rmt_math::{marchenko_pastur_pdf_c1, marchenko_pastur_pdf_c1_grid, trapezoid, DensityHistogram};
use rmt_methods::MomentEstimate;

/// Legend label of the theoretical curve.
pub const MP_LABEL: &str = "Marchenko–Pastur dMP_1";

// ─── Theoretical curve ────────────────────────────────────────────────────────

/// The Marchenko–Pastur (`c = 1`) density tabulated on a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TheoreticalCurve {
    /// Abscissae.
    pub x: Vec<Real>,
    /// Density values.
    pub y: Vec<Real>,
}

impl TheoreticalCurve {
    /// Tabulate the density on `grid`.
    pub fn on_grid(grid: &DensityGrid) -> Result<Self> {
        let x = grid.abscissae()?;
        let y = marchenko_pastur_pdf_c1_grid(&x);
        Ok(Self { x, y })
    }

    /// Trapezoid area under the tabulated curve.
    pub fn area(&self) -> Result<Real> {
        trapezoid(&self.x, &self.y)
    }
}

// ─── Empirical density ────────────────────────────────────────────────────────

/// An empirical eigenvalue histogram next to the theoretical density.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityComparison {
    /// The `(N, trials)` pair that produced the eigenvalues.
    pub config: SimulationConfig,
    /// Density histogram over the sample range.
    pub histogram: DensityHistogram,
    /// Smallest eigenvalue.
    pub min: Real,
    /// Largest eigenvalue.
    pub max: Real,
    /// `L¹` distance between histogram and the Marchenko–Pastur density.
    pub l1_distance: Real,
}

impl DensityComparison {
    /// Bin `eigenvalues` into `bins` bars and measure them against the
    /// theoretical density.
    pub fn new(config: SimulationConfig, eigenvalues: &[Real], bins: Size) -> Result<Self> {
        let histogram = DensityHistogram::new(eigenvalues, bins)?;
        let (min, max) = eigenvalues
            .iter()
            .fold((Real::INFINITY, Real::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let l1_distance = histogram.l1_distance(marchenko_pastur_pdf_c1);
        Ok(Self {
            config,
            histogram,
            min,
            max,
            l1_distance,
        })
    }

    /// Legend label, e.g. `Empirical (N=10, trials=20)`.
    pub fn label(&self) -> String {
        format!(
            "Empirical (N={}, trials={})",
            self.config.dimension(),
            self.config.trials()
        )
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} eigenvalues in [{:.4}, {:.4}], L1 distance to MP = {:.4}",
            self.label(),
            self.histogram.total_count(),
            self.min,
            self.max,
            self.l1_distance
        )
    }

    /// Per-bin table: centre, empirical density, theoretical density.
    pub fn table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:>10} {:>12} {:>12}", "x", "empirical", "MP");
        for (c, d) in self.histogram.centers().iter().zip(self.histogram.densities()) {
            let _ = writeln!(
                out,
                "{:>10.4} {:>12.6} {:>12.6}",
                c,
                d,
                marchenko_pastur_pdf_c1(*c)
            );
        }
        out
    }
}

// ─── Trace moments ────────────────────────────────────────────────────────────

/// `E[Tr(S^k)] ≈ <value>` with four decimals.
pub fn format_moment(estimate: &MomentEstimate) -> String {
    format!(
        "{} ≈ {:.4}",
        estimate.normalization.label(estimate.power),
        estimate.mean
    )
}

/// [`format_moment`] followed by the Catalan target and the gap, for
/// `N`-normalized estimates.
pub fn format_moment_with_target(estimate: &MomentEstimate) -> Result<String> {
    let target = estimate.catalan_target()?;
    let mut line = format!(
        "{}   (C_{} = {}, gap {:+.4}",
        format_moment(estimate),
        estimate.power,
        target,
        estimate.mean - target
    );
    if let Some(se) = estimate.std_error {
        let _ = write!(line, ", ±{se:.4}");
    }
    line.push(')');
    Ok(line)
}
