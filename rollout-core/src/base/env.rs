//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// The driver loop only talks to an environment through this trait, so any
/// implementation can be substituted for the bundled ones.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    ///
    /// Fails if the configuration does not describe an environment that
    /// this implementation can provide, e.g., an unknown environment id.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performes an environment step.
    ///
    /// Returns an error when called before [`Env::reset`].
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Renders the current state of the environment.
    ///
    /// Where the rendering goes depends on the implementation.
    fn render(&mut self) -> Result<()>;

    /// Draws an action uniformly at random from the action space of the environment.
    fn sample_action(&mut self) -> Self::Act;
}
