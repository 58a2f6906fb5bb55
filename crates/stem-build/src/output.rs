use std::fs;
use std::path::Path;

use stem_core::SourceRoots;

use crate::error::BuildError;

/// Make sure `path` exists and register it as a generated source root.
///
/// Missing directories are created with all their parents. An existing path
/// is left untouched, whatever it is. The root is registered in absolute
/// form; registries ignore roots they already know.
///
/// # Errors
///
/// `BuildError::Directory` if the directory cannot be created,
/// `BuildError::Registration` if the registry cannot record it.
pub fn ensure_and_register<R>(path: &Path, roots: &mut R) -> Result<(), BuildError>
where
    R: SourceRoots + ?Sized,
{
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| BuildError::Directory {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "created output directory");
    }

    let root = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    roots
        .register(&root)
        .map_err(|source| BuildError::Registration { path: root, source })
}
