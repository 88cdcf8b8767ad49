//! Configuration of [`Driver`](super::Driver).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Driver`](super::Driver).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct DriverConfig {
    /// The maximum number of environment steps in the loop.
    pub max_steps: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { max_steps: 1000 }
    }
}

impl DriverConfig {
    /// Sets the maximum number of environment steps.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Constructs [`DriverConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`DriverConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
