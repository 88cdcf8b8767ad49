//! The driver loop.
//!
//! [`Driver`] acquires an environment, resets it once and then repeats
//! render → sample → step until the episode is done or the step budget runs out.
//! When the episode ends the environment is rendered one more time, so that the
//! terminal state is shown. Exhausting the budget does not trigger that extra render.
//!
//! Errors from the environment are never handled here; they abort the loop and are
//! returned to the caller.
mod config;
use crate::{
    record::{Record, RecordValue, Recorder},
    Env,
};
use anyhow::Result;
use chrono::Local;
pub use config::DriverConfig;
use log::{debug, info, trace};

/// What happened in a single run of the driver loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeSummary {
    /// The number of calls to [`Env::step`].
    pub steps: usize,

    /// The number of calls to [`Env::render`].
    pub renders: usize,

    /// The sum of rewards.
    pub total_reward: f32,

    /// The episode reached a terminal state.
    pub terminated: bool,

    /// The episode was cut by the time limit of the environment.
    pub truncated: bool,
}

impl EpisodeSummary {
    /// The episode ended before the step budget was exhausted.
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }

    fn to_record(&self) -> Record {
        Record::from_slice(&[
            ("episode_length", RecordValue::Scalar(self.steps as _)),
            ("episode_return", RecordValue::Scalar(self.total_reward)),
            ("terminated", RecordValue::Scalar(flag(self.terminated))),
            ("truncated", RecordValue::Scalar(flag(self.truncated))),
            ("finished_at", RecordValue::DateTime(Local::now())),
        ])
    }
}

fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Runs one episode of uniformly random actions on an environment.
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    /// Constructs a driver.
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    /// Builds the environment and runs the loop on it.
    ///
    /// A failure to build the environment is returned before the environment
    /// could be reset, stepped or rendered.
    pub fn build_and_run<E, R>(
        &self,
        env_config: &E::Config,
        seed: i64,
        recorder: &mut R,
    ) -> Result<EpisodeSummary>
    where
        E: Env,
        R: Recorder,
    {
        let mut env = E::build(env_config, seed)?;
        info!("Environment built with seed {}", seed);
        self.run(&mut env, recorder)
    }

    /// Runs the loop on an environment which has not necessarily been reset.
    ///
    /// One record is written to `recorder` per step, merged with the record
    /// returned by the environment, and a summary record is written at the end.
    pub fn run<E, R>(&self, env: &mut E, recorder: &mut R) -> Result<EpisodeSummary>
    where
        E: Env,
        R: Recorder,
    {
        let obs = env.reset()?;
        debug!("Initial observation: {:?}", obs);

        let mut summary = EpisodeSummary::default();

        for ix in 0..self.config.max_steps {
            env.render()?;
            summary.renders += 1;

            let act = env.sample_action();
            let (step, record) = env.step(&act)?;
            summary.steps += 1;
            summary.total_reward += step.reward;

            trace!(
                "Step {}: act = {:?}, obs = {:?}, reward = {}",
                ix,
                step.act,
                step.obs,
                step.reward
            );

            recorder.write(record.merge(Record::from_slice(&[
                ("step", RecordValue::Scalar(ix as _)),
                ("reward", RecordValue::Scalar(step.reward)),
                ("is_terminated", RecordValue::Scalar(flag(step.is_terminated))),
                ("is_truncated", RecordValue::Scalar(flag(step.is_truncated))),
            ])));

            if step.is_done() {
                summary.terminated = step.is_terminated;
                summary.truncated = step.is_truncated;
                env.render()?;
                summary.renders += 1;
                break;
            }
        }

        if summary.is_done() {
            info!(
                "Episode done after {} steps, return = {}, terminated = {}, truncated = {}",
                summary.steps, summary.total_reward, summary.terminated, summary.truncated
            );
        } else {
            info!(
                "Step budget of {} exhausted, return = {}",
                self.config.max_steps, summary.total_reward
            );
        }
        recorder.write(summary.to_record());

        Ok(summary)
    }
}
