//! CLI error type

use thiserror::Error;

use crate::inference::InferenceError;

/// Errors surfaced by the `csvdesc` command
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inference or record reading failed
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// Report serialization failed
    #[error("Output error: {0}")]
    Output(String),

    /// Writing to stdout/stderr failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}
