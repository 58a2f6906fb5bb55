//! Stage failures of a build run. Every variant is fatal to the run.

use std::path::PathBuf;

use stem_core::{Cause, PackageName};
use stem_supplier::SupplierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// Required parameters are missing or malformed; raised before any stage.
    #[error("Invalid build configuration: {0}")]
    Configuration(String),

    /// The supplier search path could not be built.
    #[error("Error building dependency list")]
    Resolution(#[from] SupplierError),

    /// A package could not be resolved or compiled. Later packages were not attempted.
    #[error("Failed to compile package '{package}'")]
    Compilation {
        package: PackageName,
        #[source]
        source: Cause,
    },

    /// The output directory could not be created.
    #[error("Can't create output folder {}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be registered as a source root.
    #[error("Failed to register source root {}", path.display())]
    Registration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A compiled schema could not be turned into sources. Files already
    /// written for earlier schemas are left in place.
    #[error("Failed to generate sources for package '{package}'")]
    Generation {
        package: PackageName,
        #[source]
        source: Cause,
    },
}

impl BuildError {
    /// The package a compilation or generation failure is about.
    #[must_use]
    pub const fn package(&self) -> Option<&PackageName> {
        match self {
            Self::Compilation { package, .. } | Self::Generation { package, .. } => Some(package),
            _ => None,
        }
    }
}
