use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Precondition violations on the elevator. The state is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElevatorError {
    #[error("{agent} is already inside the elevator")]
    AlreadyInside { agent: String },

    #[error("{agent} is not inside the elevator")]
    NotInside { agent: String },

    #[error("{agent} is already waiting for the elevator")]
    AlreadyWaiting { agent: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
