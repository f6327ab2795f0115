//! `rmt` — Monte Carlo checks of the Marchenko–Pastur law and the Catalan
//! trace-moment limit for complex Wishart matrices.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use rmt::report::{
    format_moment, format_moment_with_target, DensityComparison, TheoreticalCurve, MP_LABEL,
};
use rmt_core::{MomentConfig, MomentNormalization, Seed, Settings, SimulationConfig, Size};
use rmt_math::RandomStream;
use rmt_methods::{trace_moment_sweep, trace_moment_sweep_parallel, EigenvalueSimulator};

#[derive(Parser)]
#[command(
    name = "rmt",
    version,
    about = "Random-matrix spectra against the Marchenko–Pastur law"
)]
struct Cli {
    /// Seed for the random stream (drawn from OS entropy when omitted)
    #[arg(long, global = true)]
    seed: Option<Seed>,

    /// Run trials on the rayon thread pool
    #[arg(long, global = true)]
    parallel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the empirical eigenvalue density with dMP_1
    Eigenvalues {
        /// Matrix dimension N (replaces the reference configurations)
        #[arg(short = 'n', long, requires = "trials")]
        dimension: Option<Size>,

        /// Number of trials
        #[arg(short, long, requires = "dimension")]
        trials: Option<Size>,

        /// Histogram bins
        #[arg(short, long)]
        bins: Option<Size>,

        /// Print the per-bin table
        #[arg(long)]
        table: bool,
    },

    /// Estimate E[Tr(S^k)] for k = 1..=max-power
    Moments {
        /// Matrix dimension N
        #[arg(short = 'n', long)]
        dimension: Option<Size>,

        /// Number of trials
        #[arg(short, long)]
        trials: Option<Size>,

        /// Largest power k
        #[arg(short = 'k', long)]
        max_power: Option<u32>,

        /// Report E[Tr(S^k)]/N next to the Catalan number C_k
        #[arg(long)]
        normalized: bool,
    },
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut settings = Settings::default();
    let seed = cli
        .seed
        .or(settings.seed)
        .unwrap_or_else(|| RandomStream::from_entropy().seed());
    settings.seed = Some(seed);
    info!("seed = {seed}");

    match cli.command {
        Commands::Eigenvalues {
            dimension,
            trials,
            bins,
            table,
        } => {
            if let (Some(n), Some(t)) = (dimension, trials) {
                settings.eigenvalue_configs = vec![SimulationConfig::new(n, t)
                    .context("invalid eigenvalue configuration")?];
            }
            if let Some(bins) = bins {
                settings.density_bins = bins;
            }
            cmd_eigenvalues(&settings, seed, cli.parallel, table)
        }
        Commands::Moments {
            dimension,
            trials,
            max_power,
            normalized,
        } => {
            let defaults = settings.moments;
            let simulation = SimulationConfig::new(
                dimension.unwrap_or(defaults.simulation.dimension()),
                trials.unwrap_or(defaults.simulation.trials()),
            )
            .context("invalid moment configuration")?;
            let normalization = if normalized {
                MomentNormalization::PerDimension
            } else {
                defaults.normalization
            };
            settings.moments = MomentConfig::new(
                simulation,
                max_power.unwrap_or(defaults.max_power),
                normalization,
            )
            .context("invalid moment configuration")?;
            cmd_moments(&settings.moments, seed, cli.parallel)
        }
    }
}

fn cmd_eigenvalues(settings: &Settings, seed: Seed, parallel: bool, table: bool) -> Result<()> {
    let curve = TheoreticalCurve::on_grid(&settings.density_grid)
        .context("failed to tabulate the Marchenko–Pastur density")?;
    println!(
        "{MP_LABEL}: {} points on [{}, {}], area {:.4}",
        curve.x.len(),
        settings.density_grid.start,
        settings.density_grid.end,
        curve.area()?
    );

    let mut rng = RandomStream::new(seed);
    for (i, &config) in settings.eigenvalue_configs.iter().enumerate() {
        info!(
            "simulating N = {}, trials = {}",
            config.dimension(),
            config.trials()
        );
        let simulator = EigenvalueSimulator::new(config);
        let eigenvalues = if parallel {
            simulator.simulate_parallel(seed.wrapping_add(i as Seed))
        } else {
            simulator.simulate(&mut rng)
        }
        .with_context(|| format!("eigenvalue simulation failed for {config:?}"))?;

        let comparison = DensityComparison::new(config, &eigenvalues, settings.density_bins)
            .context("failed to bin eigenvalues")?;
        println!("{}", comparison.summary());
        if table {
            print!("{}", comparison.table());
        }
    }
    Ok(())
}

fn cmd_moments(config: &MomentConfig, seed: Seed, parallel: bool) -> Result<()> {
    info!(
        "estimating trace moments k = 1..={} with N = {}, trials = {}",
        config.max_power,
        config.simulation.dimension(),
        config.simulation.trials()
    );
    let estimates = if parallel {
        trace_moment_sweep_parallel(config, seed)
    } else {
        trace_moment_sweep(config, &mut RandomStream::new(seed))
    }
    .context("trace-moment simulation failed")?;

    for estimate in &estimates {
        let line = match estimate.normalization {
            MomentNormalization::Raw => format_moment(estimate),
            MomentNormalization::PerDimension => format_moment_with_target(estimate)?,
        };
        println!("{line}");
    }
    Ok(())
}
