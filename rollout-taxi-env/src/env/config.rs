//! Configuration of [`TaxiEnv`](super::TaxiEnv).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Where [`TaxiEnv::render`](rollout_core::Env::render) sends frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Writes frames to the output of the environment, stdout by default.
    Human,

    /// Keeps frames in memory, see [`TaxiEnv::take_frames`](super::TaxiEnv::take_frames).
    Ansi,
}

/// Configurations of [`TaxiEnv`](super::TaxiEnv).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxiEnvConfig {
    pub(super) name: String,
    pub(super) render_mode: Option<RenderMode>,
    pub(super) max_episode_steps: Option<usize>,
}

impl Default for TaxiEnvConfig {
    fn default() -> Self {
        Self {
            name: "Taxi-v3".to_string(),
            render_mode: Some(RenderMode::Human),
            max_episode_steps: Some(200),
        }
    }
}

impl TaxiEnvConfig {
    /// Sets the id of the environment.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the render mode. `None` disables rendering.
    pub fn render_mode(mut self, v: Option<RenderMode>) -> Self {
        self.render_mode = v;
        self
    }

    /// Sets the number of steps after which an episode is truncated.
    pub fn max_episode_steps(mut self, v: Option<usize>) -> Self {
        self.max_episode_steps = v;
        self
    }

    /// Returns the id of the environment.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Constructs [`TaxiEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TaxiEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
