//! The error type shared by the series model and the configuration loader.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// An operation needs state that the object does not currently have,
    /// such as a lookup into an empty color list.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type ChartResult<T> = Result<T, ChartError>;
