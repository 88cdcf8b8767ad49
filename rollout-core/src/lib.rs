#![warn(missing_docs)]
//! Core abstractions for running an agent-free rollout on an environment.
//!
//! An environment implementing [`Env`] is built from its configuration, reset once,
//! and then driven by [`Driver`]: at every iteration the environment is rendered, an
//! action is drawn from the environment's own action space and applied with
//! [`Env::step`]. The loop stops when the episode is done or when the step budget of
//! [`DriverConfig`] is exhausted.
//!
//! ```ignore
//! let config = DriverConfig::default().max_steps(1000);
//! let mut recorder = NullRecorder {};
//! let summary = Driver::new(config).build_and_run::<TaxiEnv, _>(&env_config, 42, &mut recorder)?;
//! ```
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Discrete, Env, Info, Obs, Step};

mod driver;
pub use driver::{Driver, DriverConfig, EpisodeSummary};

mod env_id;
pub use env_id::EnvId;
