//! Random trials comparing the two searches
//!
//! The searches themselves know nothing about timing. Everything here wraps
//! them from the outside with [`timed`] and a [`Comparisons`] tally.

use crate::choices::Algorithm;
use crate::config::HarnessConfig;
use crate::models::{Pair, Point};
use crate::search::{divide, exhaustive, Comparisons};
use crate::utils::timing::{format_duration, timed};
use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Duration;

/// Outcome of one search on one point set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub pair: Pair,
    pub distance: f64,
    pub elapsed: Duration,
    /// Distance evaluations, not tracked for the parallel search
    pub comparisons: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    pub points: usize,
    pub exhaustive: Option<Measurement>,
    pub divide: Option<Measurement>,
}

impl TrialReport {
    /// Exhaustive time over divide and conquer time, when both ran
    pub fn speedup(&self) -> Option<f64> {
        let exhaustive = self.exhaustive?.elapsed.as_secs_f64();
        let divide = self.divide?.elapsed.as_secs_f64();

        if divide > 0.0 {
            Some(exhaustive / divide)
        } else {
            None
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (distance {:.6}) in {}",
            self.pair,
            self.distance,
            format_duration(self.elapsed)
        )?;

        if let Some(comparisons) = self.comparisons {
            write!(f, ", {} comparisons", comparisons)?;
        }

        Ok(())
    }
}

/// Uniform random points in `[0, bound] x [0, bound]`
pub fn random_points<R: Rng>(n: usize, bound: f64, rng: &mut R) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..=bound), rng.random_range(0.0..=bound)))
        .collect()
}

/// Runs the selected searches on `points`
///
/// When both searches run, their distances must agree exactly.
pub fn run_trial(points: &[Point], algorithm: Algorithm) -> Result<TrialReport> {
    let tally = Comparisons::new();

    let exhaustive = if algorithm.runs_exhaustive() {
        let (pair, elapsed) = timed(|| exhaustive::closest_pair_counted(points, &tally));
        let pair = pair.context("Exhaustive search failed")?;

        Some(Measurement {
            pair,
            distance: pair.distance(),
            elapsed,
            comparisons: Some(tally.count()),
        })
    } else {
        None
    };

    let divide = if algorithm.runs_divide() {
        tally.reset();
        let (pair, elapsed) = timed(|| match algorithm {
            Algorithm::Parallel => divide::closest_pair_parallel(points),
            _ => divide::closest_pair_counted(points, &tally),
        });
        let pair = pair
            .context("Divide and conquer search failed")?
            .context("Divide and conquer found no pair")?;

        Some(Measurement {
            pair,
            distance: pair.distance(),
            elapsed,
            comparisons: (algorithm != Algorithm::Parallel).then(|| tally.count()),
        })
    } else {
        None
    };

    if let (Some(e), Some(d)) = (exhaustive, divide) {
        if e.distance != d.distance {
            bail!(
                "Searches disagree: exhaustive found {} but divide and conquer found {}",
                e,
                d
            );
        }
    }

    tracing::debug!(points = points.len(), ?algorithm, "trial finished");

    Ok(TrialReport {
        points: points.len(),
        exhaustive,
        divide,
    })
}

/// Runs every trial described by `config`, showing progress on stderr
pub fn run(config: &HarnessConfig) -> Result<Vec<TrialReport>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let progress_style = ProgressStyle::default_bar()
        .template("{wide_bar} {pos}/{len} ({eta})")
        .context("Invalid progress style template")?
        .progress_chars("=>=");
    let pb = ProgressBar::new(config.trials as u64);
    pb.set_style(progress_style);

    let mut reports = Vec::with_capacity(config.trials);

    for trial in 0..config.trials {
        let points = random_points(config.points, config.bound, &mut rng);
        tracing::debug!(trial, points = points.len(), "generated points");

        match run_trial(&points, config.algorithm) {
            Ok(report) => reports.push(report),
            Err(err) => {
                pb.abandon_with_message("Failed");
                return Err(err.context(format!("Trial {} failed", trial + 1)));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(reports)
}
