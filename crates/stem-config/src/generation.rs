//! Generation feature flags and schema source naming.

use serde::{Deserialize, Serialize};
use stem_core::GenerationOptions;

const fn default_true() -> bool {
    true
}

fn default_source_extension() -> String {
    "stema".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Emit accessor methods for schema fields.
    #[serde(default = "default_true")]
    pub generate_getters: bool,

    /// Emit copy-with-change methods for schema fields.
    #[serde(default = "default_true")]
    pub generate_updaters: bool,

    /// File extension of schema sources on suppliers (without the dot).
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
}

impl GenerationConfig {
    /// The options handed to the generator for every schema.
    #[must_use]
    pub const fn options(&self) -> GenerationOptions {
        GenerationOptions::new(self.generate_getters, self.generate_updaters)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            generate_getters: true,
            generate_updaters: true,
            source_extension: default_source_extension(),
        }
    }
}
