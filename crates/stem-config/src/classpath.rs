//! Where the project's classpath entries come from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Classpath sources, consulted in field order: inline entries, then the
/// listing file, then the environment variable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClasspathConfig {
    /// Inline classpath entries.
    #[serde(default)]
    pub entries: Vec<PathBuf>,

    /// File with one classpath entry per line.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Name of an environment variable holding a platform path list.
    #[serde(default)]
    pub env: Option<String>,
}

impl ClasspathConfig {
    /// True when no classpath source is configured at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.file.is_none() && self.env.is_none()
    }
}
