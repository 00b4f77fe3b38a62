//! Errors raised by the command-line front end.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Print message to stdout and exit with code 0 (help/version/usage).
    #[error("{0}")]
    Exit(String),
    /// Print message to stderr and exit with code 1.
    #[error("{0}")]
    Message(String),
}

impl From<String> for CliError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for CliError {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<geodd::CoordinateError> for CliError {
    fn from(value: geodd::CoordinateError) -> Self {
        Self::Message(value.to_string())
    }
}

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Error opening {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum OutputError {
    /// An input record failed; the message already carries its `path:line:` prefix.
    #[error("{0}")]
    Record(String),
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
