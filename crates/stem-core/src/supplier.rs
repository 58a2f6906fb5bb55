//! Supplier descriptors: classified places to look for schema definitions.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

/// How a supplier's contents are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierKind {
    /// A directory whose files are read directly.
    Folder,
    /// A single file holding bundled schema definitions.
    Archive,
}

impl SupplierKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Archive => "archive",
        }
    }
}

impl fmt::Display for SupplierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the schema search path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierDescriptor {
    pub kind: SupplierKind,
    pub path: PathBuf,
}

impl SupplierDescriptor {
    #[must_use]
    pub fn folder(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: SupplierKind::Folder,
            path: path.into(),
        }
    }

    #[must_use]
    pub fn archive(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: SupplierKind::Archive,
            path: path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for SupplierDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} , {}", self.kind, self.path.display())
    }
}

/// Ordered, immutable schema search path.
///
/// Position defines lookup precedence: the first supplier holding a package
/// wins. Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupplierList {
    entries: Arc<[SupplierDescriptor]>,
}

impl SupplierList {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SupplierDescriptor] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SupplierDescriptor> {
        self.entries.iter()
    }
}

impl From<Vec<SupplierDescriptor>> for SupplierList {
    fn from(entries: Vec<SupplierDescriptor>) -> Self {
        Self {
            entries: entries.into(),
        }
    }
}

impl FromIterator<SupplierDescriptor> for SupplierList {
    fn from_iter<I: IntoIterator<Item = SupplierDescriptor>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SupplierList {
    type Item = &'a SupplierDescriptor;
    type IntoIter = std::slice::Iter<'a, SupplierDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for SupplierList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
