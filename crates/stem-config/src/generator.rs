//! External generator plugin settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Plugin program followed by its arguments.
    #[serde(default)]
    pub command: Vec<String>,
}

impl GeneratorConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.command.first().is_some_and(|program| !program.trim().is_empty())
    }
}
