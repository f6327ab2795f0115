//! Seedable random streams.
//!
//! [`RandomStream`] wraps the Mersenne Twister MT19937-64 from `rand_mt` and
//! implements [`rand::RngCore`], so it plugs into `rand_distr` samplers and
//! into every simulator that takes `&mut impl Rng`.
//!
//! Streams are always passed explicitly. A sequential run threads one stream
//! through all of its trials; a parallel run derives one stream per trial
//! with [`RandomStream::for_trial`], so the trial streams never share state.

use rand::RngCore;
use rand_distr::Normal;
use rand_mt::Mt19937GenRand64;
use rmt_core::{errors::Error, Real, Result, Seed, Size};

/// A uniform pseudo-random stream backed by MT19937-64.
#[derive(Clone)]
pub struct RandomStream {
    rng: Mt19937GenRand64,
    seed: Seed,
}

impl RandomStream {
    /// Create a stream from an explicit seed.
    pub fn new(seed: Seed) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
            seed,
        }
    }

    /// Create a stream seeded from OS entropy (non-reproducible).
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The independent stream used by trial `trial` of a run seeded with
    /// `base_seed`.
    ///
    /// The seed is a SplitMix64 scramble of `(base_seed, trial)`, so
    /// neighbouring trials start from unrelated generator states.
    pub fn for_trial(base_seed: Seed, trial: Size) -> Self {
        let mixed = splitmix64(base_seed ^ splitmix64(trial as u64));
        Self::new(mixed)
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> Seed {
        self.seed
    }
}

impl std::fmt::Debug for RandomStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomStream")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RngCore for RandomStream {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.rng.fill_bytes(dest);
        Ok(())
    }
}

/// A centred Gaussian sampler with standard deviation `std_dev`.
///
/// A negative or non-finite `std_dev` is an [`Error::InvalidArgument`].
pub fn gaussian(std_dev: Real) -> Result<Normal<Real>> {
    if !(std_dev.is_finite() && std_dev >= 0.0) {
        return Err(Error::InvalidArgument(format!(
            "normal standard deviation must be finite and non-negative, got {std_dev}"
        )));
    }
    Normal::new(0.0, std_dev)
        .map_err(|e| Error::InvalidArgument(format!("normal(0, {std_dev}): {e}")))
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand_distr::Distribution;
    use statrs::distribution::{ContinuousCDF, Normal as StatrsNormal};

    #[test]
    fn same_seed_same_stream() {
        let mut a = RandomStream::new(7);
        let mut b = RandomStream::new(7);
        let xs: Vec<u64> = (0..64).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..64).map(|_| b.next_u64()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn trial_streams_differ() {
        let mut s0 = RandomStream::for_trial(42, 0);
        let mut s1 = RandomStream::for_trial(42, 1);
        assert_ne!(s0.seed(), s1.seed());
        assert_ne!(s0.next_u64(), s1.next_u64());
        assert_eq!(
            RandomStream::for_trial(42, 5).seed(),
            RandomStream::for_trial(42, 5).seed()
        );
    }

    #[test]
    fn works_with_rand_traits() {
        let mut rng = RandomStream::new(3);
        let k: u32 = rng.gen_range(0..10);
        assert!(k < 10);
        let mut buf = [0u8; 13];
        rng.fill_bytes(&mut buf);
        assert!(rng.try_fill_bytes(&mut buf).is_ok());
    }

    #[test]
    fn gaussian_rejects_bad_std_dev() {
        for sd in [-1.0, -1e-300, Real::NAN, Real::INFINITY] {
            assert!(
                matches!(gaussian(sd), Err(Error::InvalidArgument(_))),
                "std_dev = {sd}"
            );
        }
        assert!(gaussian(0.5).is_ok());
        // a degenerate point mass at zero is allowed
        let mut rng = RandomStream::new(1);
        assert_eq!(gaussian(0.0).unwrap().sample(&mut rng), 0.0);
    }

    #[test]
    fn gaussian_matches_normal_cdf() {
        // Kolmogorov–Smirnov distance against the exact CDF
        let sd = 1.0 / (2.0 * 25.0_f64).sqrt();
        let dist = gaussian(sd).unwrap();
        let mut rng = RandomStream::new(2024);
        let mut xs: Vec<Real> = (0..5_000).map(|_| dist.sample(&mut rng)).collect();
        xs.sort_by(|a, b| a.total_cmp(b));

        let reference = StatrsNormal::new(0.0, sd).unwrap();
        let n = xs.len() as Real;
        let ks = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let f = reference.cdf(x);
                (f - i as Real / n).abs().max(((i + 1) as Real / n - f).abs())
            })
            .fold(0.0, Real::max);
        // 1.95/sqrt(n) is the 0.1% critical value
        assert!(ks < 1.95 / n.sqrt(), "KS distance {ks}");
    }
}
