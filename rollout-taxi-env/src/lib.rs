//! A native implementation of the `Taxi-v3` environment for [`rollout_core`].
//!
//! There are four designated landmarks in the grid world indicated by R(ed),
//! G(reen), Y(ellow) and B(lue). An episode starts with the taxi at a random
//! cell and the passenger at one of the landmarks. The taxi drives to the
//! passenger, picks them up, drives to the destination and drops them off.
//!
//! * Observation: an integer in `0..500` encoding the taxi row and column, the
//!   passenger location (one of the landmarks, or in the taxi) and the destination.
//! * Action: South, North, East, West, Pickup, Dropoff.
//! * Reward: -1 per step, +20 for delivering the passenger, -10 for a pickup or
//!   dropoff at the wrong place.
//!
//! The environment is built from an id, which must resolve to `Taxi-v3`.
//! Rendering prints the map with ANSI colors: the taxi is yellow when empty and
//! green with the passenger aboard, the passenger is blue and the destination magenta.
//!
//! ```no_run
//! use anyhow::Result;
//! use rollout_core::{record::NullRecorder, Driver, DriverConfig};
//! use rollout_taxi_env::{TaxiEnv, TaxiEnvConfig};
//!
//! fn main() -> Result<()> {
//!     let env_config = TaxiEnvConfig::default().name("Taxi-v3");
//!     let driver = Driver::new(DriverConfig::default().max_steps(1000));
//!     let summary = driver.build_and_run::<TaxiEnv, _>(&env_config, 42, &mut NullRecorder {})?;
//!     println!("{:?}", summary);
//!     Ok(())
//! }
//! ```
mod act;
mod env;
pub mod map;
mod obs;
pub mod render;
mod state;
pub use act::TaxiAct;
pub use env::{RenderMode, TaxiEnv, TaxiEnvConfig, TaxiInfo, ENV_NAME, ENV_VERSION};
pub use obs::TaxiObs;
pub use state::{TaxiState, IN_TAXI, NUM_STATES, REWARD_DELIVERY, REWARD_ILLEGAL, REWARD_STEP};
