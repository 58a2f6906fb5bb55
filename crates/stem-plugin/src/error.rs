//! Plugin engine error types.

use stem_core::PackageName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    /// No supplier holds the package's source.
    #[error("Can't find package '{package}' on {searched} dependency supplier(s)")]
    PackageNotFound { package: PackageName, searched: usize },

    /// The generator command is empty.
    #[error("No generator plugin command configured")]
    NoCommand,

    /// The plugin process could not be started.
    #[error("Failed to start generator plugin '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Talking to a running plugin failed.
    #[error("I/O error while running generator plugin '{program}'")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The plugin ran and reported failure.
    #[error("Generator plugin '{program}' failed for '{package}' ({status}): {stderr}")]
    Failed {
        program: String,
        package: PackageName,
        status: String,
        stderr: String,
    },
}
