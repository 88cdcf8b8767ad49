mod config;
use crate::{render, TaxiAct, TaxiObs, TaxiState};
use anyhow::Result;
pub use config::{RenderMode, TaxiEnvConfig};
use log::{debug, info, warn};
use rollout_core::{
    error::RolloutError,
    record::{Record, RecordValue},
    Discrete, Env, EnvId, Info, Step,
};
use std::{
    convert::TryFrom,
    io::{self, Write},
};

/// Name under which the environment is registered.
pub const ENV_NAME: &str = "Taxi";

/// Registered version of the environment.
pub const ENV_VERSION: u32 = 3;

/// Information given at every step.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxiInfo {
    /// Probability of the transition. The dynamics are deterministic.
    pub prob: f32,

    /// Valid actions in the next state, see [`TaxiState::action_mask`].
    pub action_mask: [u8; 6],
}

impl Info for TaxiInfo {}

/// The taxi problem on a 5x5 grid.
///
/// The taxi has to drive to the passenger waiting at one of four landmarks,
/// pick them up, drive to the destination landmark and drop them off.
/// Every step costs 1, illegal pickups and dropoffs cost 10 and the delivery
/// earns 20 and terminates the episode. Episodes are truncated after
/// `max_episode_steps` steps.
pub struct TaxiEnv {
    // None until the first reset
    state: Option<TaxiState>,

    last_action: Option<TaxiAct>,

    elapsed_steps: usize,

    episode_over: bool,

    max_episode_steps: Option<usize>,

    render_mode: Option<RenderMode>,

    // Random generator of initial states
    rng: fastrand::Rng,

    action_space: Discrete,

    // Sink of frames in human mode
    output: Box<dyn Write>,

    // Frames rendered in ansi mode
    frames: Vec<String>,
}

impl TaxiEnv {
    /// Replaces the sink of frames rendered in [`RenderMode::Human`].
    pub fn set_output(&mut self, output: impl Write + 'static) {
        self.output = Box::new(output);
    }

    /// Takes the frames rendered in [`RenderMode::Ansi`] so far.
    pub fn take_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.frames)
    }

    /// Returns the current state, `None` before the first reset.
    pub fn state(&self) -> Option<TaxiState> {
        self.state
    }

    /// Returns the number of steps since the last reset.
    pub fn elapsed_steps(&self) -> usize {
        self.elapsed_steps
    }

    /// Returns the frame of the current state without rendering it.
    pub fn frame(&self) -> Result<String> {
        let state = self.state.ok_or(RolloutError::NotReset)?;
        Ok(render::frame(&state, self.last_action))
    }

    /// Draws an action uniformly among those valid in the current state.
    ///
    /// Falls back to [`TaxiAct::South`] when no action is valid or before reset.
    pub fn sample_masked_action(&mut self) -> TaxiAct {
        let mask = self.state.map(|s| s.action_mask()).unwrap_or([0; 6]);
        let ix = self.action_space.sample_masked(&mask);
        TaxiAct::try_from(ix).unwrap_or(TaxiAct::South)
    }
}

impl Env for TaxiEnv {
    type Config = TaxiEnvConfig;
    type Obs = TaxiObs;
    type Act = TaxiAct;
    type Info = TaxiInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized,
    {
        EnvId::parse(&config.name)?.ensure(ENV_NAME, ENV_VERSION)?;

        let mut action_space = Discrete::new(TaxiAct::ALL.len());
        // Initial states and actions are drawn from separate streams
        action_space.seed((seed as u64).wrapping_add(1));

        info!(
            "Built {} with render mode {:?} and time limit {:?}",
            config.name, config.render_mode, config.max_episode_steps
        );

        Ok(Self {
            state: None,
            last_action: None,
            elapsed_steps: 0,
            episode_over: false,
            max_episode_steps: config.max_episode_steps,
            render_mode: config.render_mode,
            rng: fastrand::Rng::with_seed(seed as u64),
            action_space,
            output: Box::new(io::stdout()),
            frames: Vec::new(),
        })
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        let state = TaxiState::sample_initial(&mut self.rng);
        self.state = Some(state);
        self.last_action = None;
        self.elapsed_steps = 0;
        self.episode_over = false;
        debug!("Reset to {:?}", state);
        Ok(state.into())
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let state = self.state.ok_or(RolloutError::NotReset)?;
        if self.episode_over {
            return Err(RolloutError::EpisodeFinished.into());
        }

        let (next, reward, is_terminated) = state.transition(*a);
        self.state = Some(next);
        self.last_action = Some(*a);
        self.elapsed_steps += 1;

        let is_truncated = self
            .max_episode_steps
            .map_or(false, |m| self.elapsed_steps >= m);
        self.episode_over = is_terminated || is_truncated;

        let info = TaxiInfo {
            prob: 1.0,
            action_mask: next.action_mask(),
        };
        let obs = TaxiObs::from(next);
        debug!("{}: {:?} -> {:?}, reward = {}", a, state, next, reward);

        let record = Record::from_slice(&[
            ("obs", RecordValue::Scalar(obs.0 as _)),
            ("act", RecordValue::String(a.name().to_string())),
            (
                "action_mask",
                RecordValue::Array1(info.action_mask.iter().map(|&m| m as f32).collect()),
            ),
        ]);
        let step = Step::new(obs, *a, reward, is_terminated, is_truncated, info);

        Ok((step, record))
    }

    fn render(&mut self) -> Result<()> {
        match self.render_mode {
            None => {
                warn!("render() called without a render mode, nothing is rendered");
                Ok(())
            }
            Some(RenderMode::Human) => {
                let frame = self.frame()?;
                self.output.write_all(frame.as_bytes())?;
                self.output.flush()?;
                Ok(())
            }
            Some(RenderMode::Ansi) => {
                let frame = self.frame()?;
                self.frames.push(frame);
                Ok(())
            }
        }
    }

    fn sample_action(&mut self) -> Self::Act {
        TaxiAct::ALL[self.action_space.sample() as usize]
    }
}
