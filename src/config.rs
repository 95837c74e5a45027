use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::choices::Algorithm;

/// File looked up in the working directory when no path is given
pub const DEFAULT_FILE: &str = "closest-pair";

pub const ENV_PREFIX: &str = "CLOSEST_PAIR";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HarnessConfig {
    pub points: usize,
    pub trials: usize,
    pub bound: f64,
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
    pub log_level: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            points: 1000,
            trials: 5,
            bound: 1000.0,
            seed: None,
            algorithm: Algorithm::Both,
            log_level: "info".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Reads the optional config file, then `CLOSEST_PAIR_*` variables
    ///
    /// An explicit `path` must exist; the default file may be missing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.points >= 2,
            "At least 2 points per trial are required, got {}",
            self.points
        );
        ensure!(self.trials > 0, "At least one trial is required");
        ensure!(
            self.bound.is_finite() && self.bound > 0.0,
            "Coordinate bound must be a positive finite number, got {}",
            self.bound
        );

        Ok(())
    }
}
