//! Runs one episode of uniformly random actions on `Taxi-v3`, rendering every step.
//!
//! Without arguments the binary builds `Taxi-v3`, resets it and runs at most 1000
//! steps, stopping early when the episode is done. Flags and an optional YAML file
//! adjust the environment id, the step budget and the seed.
use anyhow::Result;
use clap::Parser;
use log::info;
use rollout_core::{record::NullRecorder, Driver, DriverConfig, EpisodeSummary};
use rollout_taxi_env::{TaxiEnv, TaxiEnvConfig};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

/// Run a random agent on the taxi environment
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Environment id, `Taxi-v3` by default
    #[arg(long)]
    pub env: Option<String>,

    /// Maximum number of steps, 1000 by default
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Random seed, drawn at random if omitted
    #[arg(long)]
    pub seed: Option<i64>,

    /// YAML file with `env` and `driver` sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Configuration of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Configuration of the environment.
    pub env: TaxiEnvConfig,

    /// Configuration of the driver loop.
    pub driver: DriverConfig,
}

impl RunConfig {
    /// Constructs [`RunConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`RunConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }

    /// Applies the command line flags on top of the configuration.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(name) = &args.env {
            self.env = self.env.name(name.as_str());
        }
        if let Some(max_steps) = args.max_steps {
            self.driver = self.driver.max_steps(max_steps);
        }
        self
    }
}

/// Runs the episode described by the arguments.
pub fn run(args: &Args) -> Result<EpisodeSummary> {
    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    }
    .with_args(args);
    let seed = args.seed.unwrap_or_else(|| fastrand::i64(..));

    info!(
        "Running {} for at most {} steps with seed {}",
        config.env.get_name(),
        config.driver.max_steps,
        seed
    );

    let driver = Driver::new(config.driver);
    driver.build_and_run::<TaxiEnv, _>(&config.env, seed, &mut NullRecorder {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_config() {
        let args = Args {
            env: Some("Taxi".to_string()),
            max_steps: Some(10),
            ..Default::default()
        };
        let config = RunConfig::default().with_args(&args);
        assert_eq!(config.env.get_name(), "Taxi");
        assert_eq!(config.driver.max_steps, 10);

        let config = RunConfig::default().with_args(&Args::default());
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.env.get_name(), "Taxi-v3");
        assert_eq!(config.driver.max_steps, 1000);
    }

    #[test]
    fn parse_flags() {
        let args = Args::parse_from([
            "rollout",
            "--env",
            "Taxi-v3",
            "--seed=-4",
            "--max-steps",
            "7",
        ]);
        assert_eq!(args.env.as_deref(), Some("Taxi-v3"));
        assert_eq!(args.seed, Some(-4));
        assert_eq!(args.max_steps, Some(7));
        assert!(args.config.is_none());
    }
}
