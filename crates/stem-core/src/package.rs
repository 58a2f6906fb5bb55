use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Name of a schema package, e.g. `com.example.orders`.
///
/// The name is opaque to stemgen beyond a few shape rules: it must be
/// non-empty and must not contain whitespace or path separators, since
/// suppliers look packages up by file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Validate and wrap a package name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPackageName` if the name is empty or holds
    /// whitespace, `/` or `\`.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("package name is empty")
        } else if name.chars().any(char::is_whitespace) {
            Some("package name contains whitespace")
        } else if name.contains(['/', '\\']) {
            Some("package name contains a path separator")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CoreError::InvalidPackageName {
                name,
                reason: reason.to_string(),
            }),
            None => Ok(Self(name)),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PackageName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackageName> for String {
    fn from(value: PackageName) -> Self {
        value.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
