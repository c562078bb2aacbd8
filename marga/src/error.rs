//! Error types for marga.
//!
//! The smoothing loop itself never fails; these cover configuration loading
//! and grid construction.

use thiserror::Error;

/// Marga error type
#[derive(Error, Debug)]
pub enum MargaError {
    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration text could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A parameter is outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Grid construction failed
    #[error("Grid error: {0}")]
    Grid(String),
}

impl From<serde_yaml::Error> for MargaError {
    fn from(e: serde_yaml::Error) -> Self {
        MargaError::Config(e.to_string())
    }
}

/// Result alias using [`MargaError`]
pub type Result<T> = std::result::Result<T, MargaError>;
