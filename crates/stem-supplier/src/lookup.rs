use std::fs;

use serde::Serialize;
use stem_core::{PackageName, SupplierDescriptor, SupplierKind, SupplierList};

use crate::archive::{self, ArchiveFormat};
use crate::error::SupplierError;

/// Default extension of schema source files.
pub const DEFAULT_SOURCE_EXTENSION: &str = "stema";

/// The source text of one package and the supplier it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaSource {
    pub package: PackageName,
    pub origin: SupplierDescriptor,
    pub text: String,
}

/// Finds package sources along a supplier list.
///
/// A package `a.b.c` is stored as the file `a.b.c.<extension>` at the root of
/// a folder or archive. Suppliers are searched in list order and the first
/// hit wins.
#[derive(Debug, Clone)]
pub struct SourceLookup {
    suppliers: SupplierList,
    extension: String,
}

impl SourceLookup {
    #[must_use]
    pub fn new(suppliers: SupplierList) -> Self {
        Self {
            suppliers,
            extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    #[must_use]
    pub const fn suppliers(&self) -> &SupplierList {
        &self.suppliers
    }

    /// File name a package is stored under.
    #[must_use]
    pub fn file_name(&self, package: &PackageName) -> String {
        format!("{package}.{}", self.extension)
    }

    /// Look `package` up on every supplier in order.
    ///
    /// Archives in formats other than tar / tar.gz are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a supplier that may hold the package cannot be
    /// read. A package that is simply absent is `Ok(None)`.
    pub fn find(&self, package: &PackageName) -> Result<Option<SchemaSource>, SupplierError> {
        let file_name = self.file_name(package);

        for supplier in &self.suppliers {
            let text = match supplier.kind {
                SupplierKind::Folder => read_from_folder(supplier, &file_name)?,
                SupplierKind::Archive => match ArchiveFormat::detect(&supplier.path) {
                    Some(format) => archive::read_entry(&supplier.path, format, &file_name)?,
                    None => {
                        tracing::debug!(
                            path = %supplier.path.display(),
                            "skipping archive in unsupported format"
                        );
                        None
                    }
                },
            };

            if let Some(text) = text {
                tracing::debug!(%package, origin = %supplier, "found schema source");
                return Ok(Some(SchemaSource {
                    package: package.clone(),
                    origin: supplier.clone(),
                    text,
                }));
            }
        }

        Ok(None)
    }
}

fn read_from_folder(
    supplier: &SupplierDescriptor,
    file_name: &str,
) -> Result<Option<String>, SupplierError> {
    let candidate = supplier.path.join(file_name);
    if !candidate.is_file() {
        return Ok(None);
    }
    fs::read_to_string(&candidate)
        .map(Some)
        .map_err(|source| SupplierError::Io {
            path: candidate,
            source,
        })
}
