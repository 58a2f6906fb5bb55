//! Reading single entries out of tar-based supplier archives.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::SupplierError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Tar,
    TarGz,
}

impl ArchiveFormat {
    /// Detect the format from the file name; `None` for unsupported archives.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else if name.ends_with(".tar") {
            Some(Self::Tar)
        } else {
            None
        }
    }
}

/// Read the regular-file entry `name` at the archive root, if present.
pub fn read_entry(
    path: &Path,
    format: ArchiveFormat,
    name: &str,
) -> Result<Option<String>, SupplierError> {
    let file = File::open(path).map_err(|source| SupplierError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    match format {
        ArchiveFormat::Tar => find_entry(tar::Archive::new(reader), path, name),
        ArchiveFormat::TarGz => find_entry(tar::Archive::new(GzDecoder::new(reader)), path, name),
    }
}

fn find_entry<R: Read>(
    mut archive: tar::Archive<R>,
    path: &Path,
    name: &str,
) -> Result<Option<String>, SupplierError> {
    let archive_error = |source: std::io::Error| SupplierError::Archive {
        path: path.to_path_buf(),
        source,
    };

    for entry in archive.entries().map_err(archive_error)? {
        let mut entry = entry.map_err(archive_error)?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        let matches = {
            let entry_path = entry.path().map_err(archive_error)?;
            entry_path.strip_prefix(".").unwrap_or(&*entry_path) == Path::new(name)
        };
        if matches {
            let mut text = String::new();
            entry.read_to_string(&mut text).map_err(archive_error)?;
            return Ok(Some(text));
        }
    }

    Ok(None)
}
