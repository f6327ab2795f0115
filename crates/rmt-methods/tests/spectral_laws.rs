//! Statistical checks of the simulators against the Marchenko–Pastur law and
//! the Catalan moment limit.
//!
//! Every test runs on fixed seeds so the outcome is reproducible.

use proptest::prelude::*;
use rmt_core::{MomentNormalization, Real, SimulationConfig, Size};
use rmt_math::{
    catalan, marchenko_pastur_pdf_c1, DensityHistogram, RandomStream, Statistics, MP_C1_SUPPORT,
};
use rmt_methods::{wishart, EigenvalueSimulator, TraceMomentSimulator};

fn config(n: Size, trials: Size) -> SimulationConfig {
    SimulationConfig::new(n, trials).unwrap()
}

/// Mean absolute deviation of the `E[Tr(S^k)]/N` estimate from `C_k`,
/// averaged over `runs` independent seeded runs.
fn catalan_deviation(n: Size, power: u32, trials: Size, runs: u64) -> Real {
    let target = catalan(power).unwrap() as Real;
    let sim = TraceMomentSimulator::new(config(n, trials), power).unwrap();
    let deviations: Statistics = (0..runs)
        .map(|run| {
            let mut rng = RandomStream::new(1_000 * n as u64 + run);
            let est = sim
                .simulate(MomentNormalization::PerDimension, &mut rng)
                .unwrap();
            (est.mean - target).abs()
        })
        .collect();
    deviations.mean().unwrap()
}

// ─── Eigenvalue density ───────────────────────────────────────────────────────

#[test]
fn empirical_density_tracks_marchenko_pastur() {
    let eigs = EigenvalueSimulator::new(config(50, 20))
        .simulate(&mut RandomStream::new(314))
        .unwrap();
    assert_eq!(eigs.len(), 1_000);

    let (lo, hi) = MP_C1_SUPPORT;
    let hist = DensityHistogram::with_range(&eigs, 20, lo, hi).unwrap();
    assert!((hist.integral() - 1.0).abs() < 1e-12);

    let mad = hist
        .mean_abs_deviation(marchenko_pastur_pdf_c1, 0.5, 3.5)
        .unwrap();
    assert!(mad < 0.08, "mean |ρ̂ − ρ| over the bulk = {mad}");
}

#[test]
fn pooled_eigenvalue_moments() {
    // mean eigenvalue is Tr(S)/N (exactly 1 in expectation); mean square is 2
    let eigs = EigenvalueSimulator::new(config(40, 25))
        .simulate(&mut RandomStream::new(27))
        .unwrap();
    let first: Statistics = eigs.iter().copied().collect();
    let second: Statistics = eigs.iter().map(|l| l * l).collect();
    assert!((first.mean().unwrap() - 1.0).abs() < 0.02, "{:?}", first.mean());
    assert!((second.mean().unwrap() - 2.0).abs() < 0.1, "{:?}", second.mean());
    assert!(first.minimum().unwrap() >= -1e-10);
}

#[test]
fn reference_configurations_produce_full_collections() {
    let mut rng = RandomStream::new(0);
    for (n, trials) in [(10, 20), (20, 50)] {
        let eigs = EigenvalueSimulator::new(config(n, trials))
            .simulate(&mut rng)
            .unwrap();
        assert_eq!(eigs.len(), n * trials);
        assert!(eigs.iter().all(|&l| l >= -1e-10));
    }
}

// ─── Trace moments ────────────────────────────────────────────────────────────

#[test]
fn normalized_moments_approach_catalan_as_n_grows() {
    let deviations: Vec<Real> = [5, 20, 80]
        .into_iter()
        .map(|n| catalan_deviation(n, 3, 8, 24))
        .collect();
    assert!(
        deviations.windows(2).all(|w| w[1] < w[0]),
        "deviation from C_3 should shrink with N: {deviations:?}"
    );
}

#[test]
#[ignore = "slow: runs N up to 200"]
fn normalized_moments_approach_catalan_reference_sizes() {
    let deviations: Vec<Real> = [10, 50, 100, 200]
        .into_iter()
        .map(|n| catalan_deviation(n, 2, 5, 40))
        .collect();
    assert!(
        deviations.windows(2).all(|w| w[1] < w[0]),
        "deviation from C_2 should shrink with N: {deviations:?}"
    );
}

#[test]
fn normalized_moments_near_catalan_at_moderate_n() {
    let sim_config = config(60, 40);
    let mut rng = RandomStream::new(55);
    for k in 1..=4u32 {
        let est = TraceMomentSimulator::new(sim_config, k)
            .unwrap()
            .simulate(MomentNormalization::PerDimension, &mut rng)
            .unwrap();
        let gap = est.catalan_gap().unwrap();
        let se = est.std_error.unwrap();
        // finite-N bias is O(1/N²) here, far below the sampling error
        assert!(gap.abs() < 5.0 * se + 0.05, "k = {k}: gap {gap}, se {se}");
    }
}

// ─── Reproducibility ──────────────────────────────────────────────────────────

#[test]
fn fixed_seed_is_bit_identical() {
    let sim = EigenvalueSimulator::new(config(12, 6));
    let a = sim.simulate(&mut RandomStream::new(8_675_309)).unwrap();
    let b = sim.simulate(&mut RandomStream::new(8_675_309)).unwrap();
    assert_eq!(a.len(), b.len());
    assert!(a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits()));
}

#[test]
fn parallel_run_ignores_thread_count() {
    let sim = EigenvalueSimulator::new(config(10, 16));
    let run_with = |threads: usize| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap()
            .install(|| sim.simulate_parallel(42).unwrap())
    };
    let one = run_with(1);
    let four = run_with(4);
    assert_eq!(one, four);
    assert_eq!(one, sim.simulate_per_trial_streams(42).unwrap());
}

// ─── Structural invariants ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn wishart_samples_are_hermitian_psd(seed in any::<u64>(), n in 1usize..16) {
        let s = wishart(n, &mut RandomStream::new(seed)).unwrap();
        prop_assert!(s.hermitian_defect() < 1e-10);
        let eigs = s.hermitian_eigenvalues().unwrap();
        prop_assert_eq!(eigs.len(), n);
        prop_assert!(eigs.iter().all(|&l| l >= -1e-10));
    }
}
