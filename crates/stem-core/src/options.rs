use serde::{Deserialize, Serialize};

/// Feature flags handed unchanged to the generator for every schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Emit accessor methods for schema fields.
    pub generate_getters: bool,
    /// Emit copy-with-change ("with") methods for schema fields.
    pub generate_updaters: bool,
}

impl GenerationOptions {
    #[must_use]
    pub const fn new(generate_getters: bool, generate_updaters: bool) -> Self {
        Self {
            generate_getters,
            generate_updaters,
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_both_features() {
        let options = GenerationOptions::default();
        assert!(options.generate_getters);
        assert!(options.generate_updaters);
    }
}
