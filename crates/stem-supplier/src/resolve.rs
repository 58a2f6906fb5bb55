use std::path::{Path, PathBuf};

use stem_core::{SupplierDescriptor, SupplierKind, SupplierList};

use crate::classpath::ClasspathProvider;
use crate::error::SupplierError;

/// Build the schema search path for one run.
///
/// The resource directory comes first when it exists, followed by every
/// existing classpath entry in classpath order: directories as folders,
/// anything else as archives. Entries that do not exist are dropped. Paths
/// are recorded in absolute form.
///
/// # Errors
///
/// Returns `SupplierError::Classpath` if the classpath cannot be enumerated.
/// Nothing is resolved in that case.
pub fn resolve<P>(resource_dir: &Path, classpath: &P) -> Result<SupplierList, SupplierError>
where
    P: ClasspathProvider + ?Sized,
{
    tracing::info!("resolving schema suppliers");
    let mut suppliers = Vec::new();

    if resource_dir.exists() {
        suppliers.push(added(SupplierDescriptor::folder(absolute(resource_dir))));
    } else {
        tracing::debug!(path = %resource_dir.display(), "resource directory does not exist");
    }

    let entries = classpath
        .entries()
        .map_err(|error| SupplierError::Classpath(error.into()))?;
    for entry in entries {
        if !entry.exists() {
            tracing::debug!(path = %entry.display(), "skipping missing classpath entry");
            continue;
        }
        let kind = if entry.is_dir() {
            SupplierKind::Folder
        } else {
            SupplierKind::Archive
        };
        suppliers.push(added(SupplierDescriptor {
            kind,
            path: absolute(&entry),
        }));
    }

    Ok(suppliers.into())
}

fn added(supplier: SupplierDescriptor) -> SupplierDescriptor {
    tracing::info!(
        kind = %supplier.kind,
        path = %supplier.path.display(),
        "adding dependency supplier"
    );
    supplier
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
