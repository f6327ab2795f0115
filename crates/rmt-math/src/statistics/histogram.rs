//! Empirical probability density from a sample collection.

use rmt_core::{ensure, Real, Result, Size};

/// Equal-width histogram normalized to unit area.
///
/// Bins are half-open `[e_i, e_{i+1})` except the last, which also includes
/// its right edge. Each density is `count / (total · width)`, where `total`
/// counts only the samples that fell inside the range.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityHistogram {
    edges: Vec<Real>,
    counts: Vec<Size>,
    densities: Vec<Real>,
}

impl DensityHistogram {
    /// Histogram over the sample range `[min, max]`.
    ///
    /// A constant sample set gets the range `[x − 0.5, x + 0.5]`.
    pub fn new(samples: &[Real], bins: Size) -> Result<Self> {
        ensure!(!samples.is_empty(), "cannot build a histogram from no samples");
        ensure!(
            samples.iter().all(|x| x.is_finite()),
            "histogram samples must be finite"
        );
        let (lo, hi) = samples
            .iter()
            .fold((Real::INFINITY, Real::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        Self::with_range(samples, bins, lo, hi)
    }

    /// Histogram over an explicit range `[lo, hi]`; samples outside it (and
    /// NaNs) are ignored.
    pub fn with_range(samples: &[Real], bins: Size, lo: Real, hi: Real) -> Result<Self> {
        ensure!(bins > 0, "histogram needs at least one bin");
        ensure!(
            lo.is_finite() && hi.is_finite() && hi > lo,
            "invalid histogram range [{lo}, {hi}]"
        );
        let width = (hi - lo) / bins as Real;
        let edges: Vec<Real> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + i as Real * width })
            .collect();

        let mut counts = vec![0; bins];
        for &x in samples {
            if !(lo..=hi).contains(&x) {
                continue;
            }
            let idx = (((x - lo) / width) as Size).min(bins - 1);
            counts[idx] += 1;
        }

        let total: Size = counts.iter().sum();
        let densities = counts
            .iter()
            .zip(edges.windows(2))
            .map(|(&c, e)| {
                if total == 0 {
                    0.0
                } else {
                    c as Real / (total as Real * (e[1] - e[0]))
                }
            })
            .collect();

        Ok(Self {
            edges,
            counts,
            densities,
        })
    }

    /// Number of bins.
    pub fn bins(&self) -> Size {
        self.counts.len()
    }

    /// Bin edges (`bins + 1` values).
    pub fn edges(&self) -> &[Real] {
        &self.edges
    }

    /// Raw counts per bin.
    pub fn counts(&self) -> &[Size] {
        &self.counts
    }

    /// Normalized densities per bin.
    pub fn densities(&self) -> &[Real] {
        &self.densities
    }

    /// Number of samples that landed in some bin.
    pub fn total_count(&self) -> Size {
        self.counts.iter().sum()
    }

    /// Bin mid-points.
    pub fn centers(&self) -> Vec<Real> {
        self.edges.windows(2).map(|e| 0.5 * (e[0] + e[1])).collect()
    }

    /// Area under the histogram; `1` unless it is empty.
    pub fn integral(&self) -> Real {
        self.edges
            .windows(2)
            .zip(&self.densities)
            .map(|(e, d)| (e[1] - e[0]) * d)
            .sum()
    }

    /// `L¹` distance `Σ |hᵢ − f(cᵢ)| · wᵢ` to a reference density `f`
    /// evaluated at the bin centres.
    pub fn l1_distance<F: Fn(Real) -> Real>(&self, f: F) -> Real {
        self.edges
            .windows(2)
            .zip(&self.densities)
            .map(|(e, d)| (d - f(0.5 * (e[0] + e[1]))).abs() * (e[1] - e[0]))
            .sum()
    }

    /// Mean of `|hᵢ − f(cᵢ)|` over the bins whose centre lies in
    /// `[lo, hi]`. `None` when no centre falls in the window.
    pub fn mean_abs_deviation<F: Fn(Real) -> Real>(&self, f: F, lo: Real, hi: Real) -> Option<Real> {
        let deviations: Vec<Real> = self
            .centers()
            .into_iter()
            .zip(&self.densities)
            .filter(|(c, _)| (lo..=hi).contains(c))
            .map(|(c, d)| (d - f(c)).abs())
            .collect();
        if deviations.is_empty() {
            None
        } else {
            Some(deviations.iter().sum::<Real>() / deviations.len() as Real)
        }
    }
}
