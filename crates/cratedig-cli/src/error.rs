//! Error types for the CLI application.

use cratedig_extractor::ExtractError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Extraction failed
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The output document could not be written
    #[error("Cannot write {}: {source}", path.display())]
    Output {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// An input that cannot be opened exits with 1; every other failure
    /// exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Extract(e) if e.is_resource() => 1,
            _ => 2,
        }
    }
}
