//! Supplier error types.

use std::path::PathBuf;

use stem_core::Cause;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplierError {
    /// The project's classpath could not be enumerated.
    #[error("Classpath entries could not be enumerated")]
    Classpath(#[source] Cause),

    /// A supplier file or folder could not be read.
    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A supplier archive is corrupt or not readable as tar.
    #[error("Failed to read archive {}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
