//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum RolloutError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// Malformed environment id.
    #[error("Malformed environment id: {0:?}")]
    MalformedEnvId(String),

    /// No environment is registered under the name.
    #[error("No registered env with id: {0}")]
    UnknownEnv(String),

    /// The requested version of the environment has been superseded.
    #[error("Environment version for {id} is deprecated, please use {latest} instead")]
    DeprecatedEnv {
        /// Requested id.
        id: String,
        /// Latest registered id.
        latest: String,
    },

    /// The requested version of the environment does not exist.
    #[error("Environment version {id} not found, the latest version is {latest}")]
    VersionNotFound {
        /// Requested id.
        id: String,
        /// Latest registered id.
        latest: String,
    },

    /// The environment was stepped or rendered before being reset.
    #[error("Cannot step or render the environment before calling reset()")]
    NotReset,

    /// The environment was stepped after the episode ended.
    #[error("Episode has finished, call reset() before stepping again")]
    EpisodeFinished,

    /// The action is not contained in the action space.
    #[error("Invalid action: {0}")]
    InvalidAction(i64),
}
