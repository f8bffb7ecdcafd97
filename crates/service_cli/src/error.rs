//! CLI error types.

use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// A referenced file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialisation error
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    /// Share-map parsing or decoding failure
    #[error(transparent)]
    Share(#[from] adapter_shares::ShareError),

    /// Polynomial construction failure
    #[error(transparent)]
    Polynomial(#[from] poly_core::types::PolynomialError),
}
