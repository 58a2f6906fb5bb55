//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required configuration value is absent or empty.
    #[error("Missing required configuration value '{field}'")]
    Missing { field: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// A project `.env` file exists but could not be loaded.
    #[error("Failed to load dotenv file at {}", path.display())]
    Dotenv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
