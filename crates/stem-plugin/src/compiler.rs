use stem_core::{PackageName, SchemaCompiler, SupplierList};
use stem_supplier::{SchemaSource, SourceLookup};

use crate::error::PluginError;

/// Resolves packages to their source text along the supplier search path.
#[derive(Debug, Clone)]
pub struct SourceCompiler {
    lookup: SourceLookup,
}

impl SourceCompiler {
    #[must_use]
    pub fn new(suppliers: &SupplierList) -> Self {
        Self {
            lookup: SourceLookup::new(suppliers.clone()),
        }
    }

    /// Look for `<package>.<extension>` instead of the default extension.
    #[must_use]
    pub fn with_extension(suppliers: &SupplierList, extension: &str) -> Self {
        Self {
            lookup: SourceLookup::new(suppliers.clone()).with_extension(extension),
        }
    }

    #[must_use]
    pub const fn lookup(&self) -> &SourceLookup {
        &self.lookup
    }
}

impl SchemaCompiler for SourceCompiler {
    type Schema = SchemaSource;

    fn compile(&self, package: &PackageName) -> anyhow::Result<SchemaSource> {
        match self.lookup.find(package)? {
            Some(source) => Ok(source),
            None => Err(PluginError::PackageNotFound {
                package: package.clone(),
                searched: self.lookup.suppliers().len(),
            }
            .into()),
        }
    }
}
