//! Core functionalities.
mod env;
mod space;
mod step;
pub use env::Env;
pub use space::Discrete;
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Environments in this library are not vectorized, so an object implementing
/// this trait always holds the observation of a single environment.
pub trait Obs: Clone + Debug {}

/// An action of an environment.
pub trait Act: Clone + Debug {}
