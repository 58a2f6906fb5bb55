//! # stem-config
//!
//! Layered configuration loading for stemgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides ([`ConfigOverrides`])
//! 2. Environment variables (`STEMGEN_*` prefix, `__` as separator)
//! 3. Project-level `stemgen.toml` (or an explicit `--config` file)
//! 4. User-level `~/.config/stemgen/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STEMGEN_OUTPUT_DIRECTORY` -> `output_directory`,
//! `STEMGEN_GENERATION__GENERATE_GETTERS` -> `generation.generate_getters`, etc.
//! Lists use figment's inline syntax: `STEMGEN_PACKAGES=[pkg.a,pkg.b]`.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use stem_config::StemConfig;
//!
//! let config = StemConfig::load_with_dotenv(Path::new("/work/app")).expect("config");
//! let packages = config.package_names().expect("packages");
//! println!("generating {} packages", packages.len());
//! ```

mod classpath;
mod error;
mod generation;
mod generator;

pub use classpath::ClasspathConfig;
pub use error::ConfigError;
pub use generation::GenerationConfig;
pub use generator::GeneratorConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use stem_core::PackageName;

/// Project-local configuration file name.
pub const CONFIG_FILE_NAME: &str = "stemgen.toml";

fn default_output_directory() -> PathBuf {
    PathBuf::from("target/generated-sources/stemgen")
}

fn default_resources_directory() -> PathBuf {
    PathBuf::from("src/main/resources")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StemConfig {
    /// Where generated sources are written; registered as a source root.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Local schema folder, searched before any classpath entry.
    #[serde(default = "default_resources_directory")]
    pub resources_directory: PathBuf,

    /// Packages to compile and generate, in order.
    #[serde(default)]
    pub packages: Vec<String>,

    #[serde(default)]
    pub classpath: ClasspathConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for StemConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            resources_directory: default_resources_directory(),
            packages: Vec::new(),
            classpath: ClasspathConfig::default(),
            generation: GenerationConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Values supplied on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output_directory: Option<PathBuf>,
    pub resources_directory: Option<PathBuf>,
    pub packages: Vec<String>,
    pub classpath_entries: Vec<PathBuf>,
    pub classpath_file: Option<PathBuf>,
    pub generator_command: Vec<String>,
}

impl ConfigOverrides {
    /// Merge the set overrides on top of `figment`.
    #[must_use]
    pub fn apply(self, mut figment: Figment) -> Figment {
        if let Some(dir) = self.output_directory {
            figment = figment.merge(Serialized::default("output_directory", dir));
        }
        if let Some(dir) = self.resources_directory {
            figment = figment.merge(Serialized::default("resources_directory", dir));
        }
        if !self.packages.is_empty() {
            figment = figment.merge(Serialized::default("packages", self.packages));
        }
        if !self.classpath_entries.is_empty() {
            figment = figment.merge(Serialized::default(
                "classpath.entries",
                self.classpath_entries,
            ));
        }
        if let Some(file) = self.classpath_file {
            figment = figment.merge(Serialized::default("classpath.file", file));
        }
        if !self.generator_command.is_empty() {
            figment = figment.merge(Serialized::default(
                "generator.command",
                self.generator_command,
            ));
        }
        figment
    }
}

impl StemConfig {
    /// Load configuration for the project rooted at `project_dir`.
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        Self::figment(project_dir, None)?
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration after reading `<project_dir>/.env`, if present.
    pub fn load_with_dotenv(project_dir: &Path) -> Result<Self, ConfigError> {
        Self::load_dotenv(project_dir)?;
        Self::load(project_dir)
    }

    /// Read `<project_dir>/.env` into the process environment, if present.
    ///
    /// Variables already present in the process environment win.
    ///
    /// # Errors
    ///
    /// `ConfigError::Dotenv` if the file exists but cannot be read or parsed.
    pub fn load_dotenv(project_dir: &Path) -> Result<(), ConfigError> {
        let path = project_dir.join(".env");
        if path.exists() {
            dotenvy::from_path(&path).map_err(|source| ConfigError::Dotenv { path, source })?;
        }
        Ok(())
    }

    /// Build the figment provider chain, without command-line overrides.
    ///
    /// `config_file` replaces the project-local `stemgen.toml`; unlike the
    /// implicit file it must exist.
    pub fn figment(project_dir: &Path, config_file: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local or explicit config
        match config_file {
            Some(path) => {
                let path = project_dir.join(path);
                if !path.is_file() {
                    return Err(ConfigError::InvalidValue {
                        field: "config".to_string(),
                        reason: format!("config file {} does not exist", path.display()),
                    });
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let local_path = project_dir.join(CONFIG_FILE_NAME);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed("STEMGEN_").split("__"));

        Ok(figment)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stemgen").join("config.toml"))
    }

    /// Make every relative path absolute against `base`.
    ///
    /// Empty classpath entries are dropped rather than resolved to `base`.
    #[must_use]
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        self.output_directory = base.join(&self.output_directory);
        self.resources_directory = base.join(&self.resources_directory);
        self.classpath.entries = self
            .classpath
            .entries
            .iter()
            .filter(|entry| !entry.as_os_str().is_empty())
            .map(|entry| base.join(entry))
            .collect();
        self.classpath.file = self.classpath.file.map(|file| base.join(file));
        self
    }

    /// The requested packages, validated.
    ///
    /// # Errors
    ///
    /// `ConfigError::Missing` if no package is configured, or
    /// `ConfigError::InvalidValue` for the first malformed name.
    pub fn package_names(&self) -> Result<Vec<PackageName>, ConfigError> {
        if self.packages.is_empty() {
            return Err(ConfigError::Missing {
                field: "packages".to_string(),
            });
        }

        self.packages
            .iter()
            .map(|name| {
                PackageName::new(name.as_str()).map_err(|error| ConfigError::InvalidValue {
                    field: "packages".to_string(),
                    reason: error.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_has_standard_locations() {
        let config = StemConfig::default();
        assert_eq!(
            config.output_directory,
            PathBuf::from("target/generated-sources/stemgen")
        );
        assert_eq!(
            config.resources_directory,
            PathBuf::from("src/main/resources")
        );
        assert!(config.packages.is_empty());
        assert!(config.classpath.is_empty());
        assert!(!config.generator.is_configured());
    }

    #[test]
    fn missing_packages_is_a_configuration_error() {
        let err = StemConfig::default().package_names().expect_err("no packages");
        assert!(matches!(err, ConfigError::Missing { ref field } if field == "packages"));
    }

    #[test]
    fn malformed_package_is_rejected() {
        let config = StemConfig {
            packages: vec!["pkg.A".to_string(), "pkg B".to_string()],
            ..StemConfig::default()
        };
        let err = config.package_names().expect_err("malformed");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn resolve_paths_keeps_absolute_entries() {
        let config = StemConfig {
            classpath: ClasspathConfig {
                entries: vec![PathBuf::from("/abs/lib.tar"), PathBuf::from("rel/classes")],
                file: Some(PathBuf::from("classpath.txt")),
                env: None,
            },
            ..StemConfig::default()
        }
        .resolve_paths(Path::new("/work/app"));

        assert_eq!(
            config.output_directory,
            PathBuf::from("/work/app/target/generated-sources/stemgen")
        );
        assert_eq!(
            config.classpath.entries,
            vec![
                PathBuf::from("/abs/lib.tar"),
                PathBuf::from("/work/app/rel/classes")
            ]
        );
        assert_eq!(
            config.classpath.file,
            Some(PathBuf::from("/work/app/classpath.txt"))
        );
    }

    #[test]
    fn malformed_dotenv_is_an_error() {
        let temp = tempfile::TempDir::new().expect("tempdir should create");
        std::fs::write(temp.path().join(".env"), "this line has no assignment\n")
            .expect("dotenv should write");

        let err = StemConfig::load_dotenv(temp.path()).expect_err("unparseable");
        assert!(matches!(
            err,
            ConfigError::Dotenv { ref path, .. } if *path == temp.path().join(".env")
        ));
    }

    #[test]
    fn missing_dotenv_is_fine() {
        let temp = tempfile::TempDir::new().expect("tempdir should create");
        StemConfig::load_dotenv(temp.path()).expect("nothing to load");
    }

    #[test]
    fn resolve_paths_drops_empty_classpath_entries() {
        let config = StemConfig {
            classpath: ClasspathConfig {
                entries: vec![PathBuf::new(), PathBuf::from("deps/a.tar")],
                ..ClasspathConfig::default()
            },
            ..StemConfig::default()
        }
        .resolve_paths(Path::new("/work/app"));

        assert_eq!(
            config.classpath.entries,
            vec![PathBuf::from("/work/app/deps/a.tar")]
        );
    }
}
