use anyhow::{Context, Result};
use clap::Parser;
use closest_pair::choices::{get_point_count, Algorithm, PointCount};
use closest_pair::config::HarnessConfig;
use closest_pair::harness::{self, TrialReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Times exhaustive and divide and conquer closest pair searches on random points
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file, defaults to `closest-pair.{toml,json,yaml}` if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Points per trial
    #[arg(short, long)]
    points: Option<usize>,

    /// Number of trials
    #[arg(short, long)]
    trials: Option<usize>,

    /// Coordinates are drawn from [0, bound]
    #[arg(short, long)]
    bound: Option<f64>,

    /// Seed for reproducible point sets
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Default log filter, `RUST_LOG` takes precedence
    #[arg(long)]
    log_level: Option<String>,

    /// Pick the algorithm and point count from prompts
    #[arg(short, long)]
    interactive: bool,
}

impl Cli {
    fn apply(&self, config: &mut HarnessConfig) {
        if let Some(points) = self.points {
            config.points = points;
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(bound) = self.bound {
            config.bound = bound;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt(config: &mut HarnessConfig) -> Result<()> {
    config.algorithm = Algorithm::choice("Please select an algorithm")
        .ok()
        .context("Failed to get user input")?;

    let count = PointCount::choice("How many points should each trial use?")
        .ok()
        .context("Failed to get user input")?;
    config.points = get_point_count(count)?;

    Ok(())
}

fn print_report(trial: usize, report: &TrialReport) {
    println!("Trial {} ({} points)", trial + 1, report.points);

    if let Some(exhaustive) = &report.exhaustive {
        println!("  exhaustive:         {}", exhaustive);
    }
    if let Some(divide) = &report.divide {
        println!("  divide and conquer: {}", divide);
    }
    if let Some(speedup) = report.speedup() {
        println!("  speedup:            {:.1}x", speedup);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = HarnessConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    init_logging(&config.log_level);

    if cli.interactive {
        prompt(&mut config)?;
    }

    println!(
        "Running {} trial(s) of {} points with {}",
        config.trials, config.points, config.algorithm
    );

    let reports = harness::run(&config)?;

    for (trial, report) in reports.iter().enumerate() {
        print_report(trial, report);
    }

    let speedups: Vec<f64> = reports.iter().filter_map(TrialReport::speedup).collect();
    if !speedups.is_empty() {
        println!(
            "Average speedup over {} trial(s): {:.1}x",
            speedups.len(),
            speedups.iter().sum::<f64>() / speedups.len() as f64
        );
    }

    Ok(())
}
