//! Statistics accumulators.
//!
//! [`Statistics`] summarizes a stream of scalar samples (trace moments, one
//! per trial). [`DensityHistogram`] bins a sample collection (eigenvalues)
//! into an empirical probability density.

pub mod histogram;

pub use histogram::DensityHistogram;

use rmt_core::{Real, Size};

/// Running mean/variance accumulator (Welford's update).
#[derive(Debug, Clone)]
pub struct Statistics {
    count: Size,
    mean: Real,
    m2: Real,
    min: Real,
    max: Real,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: Real::INFINITY,
            max: Real::NEG_INFINITY,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as Real;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Number of samples.
    pub fn samples(&self) -> Size {
        self.count
    }

    /// Sample mean. `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then_some(self.mean)
    }

    /// Unbiased (Bessel-corrected) variance. `None` for fewer than 2 samples.
    pub fn variance(&self) -> Option<Real> {
        (self.count > 1).then(|| self.m2 / (self.count - 1) as Real)
    }

    /// Standard deviation. `None` for fewer than 2 samples.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }

    /// Standard error of the mean, `σ / √n`.
    pub fn error_estimate(&self) -> Option<Real> {
        self.std_dev().map(|s| s / (self.count as Real).sqrt())
    }

    /// Minimum sample value.
    pub fn minimum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.min)
    }

    /// Maximum sample value.
    pub fn maximum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.max)
    }
}

impl Extend<Real> for Statistics {
    fn extend<I: IntoIterator<Item = Real>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<Real> for Statistics {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}
