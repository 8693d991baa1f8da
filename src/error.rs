//! Error types for copilot-rs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// One or more required variables are absent or blank. Lists every one.
    #[error("missing required configuration: {}", .missing.join(", "))]
    MissingConfiguration { missing: Vec<&'static str> },

    #[error("failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("telemetry: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
