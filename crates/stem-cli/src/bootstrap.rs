use std::path::{Path, PathBuf};

use anyhow::Context;
use stem_config::{ConfigOverrides, StemConfig};
use stem_supplier::{ChainedClasspath, ClasspathFile, EnvClasspath, StaticClasspath};

use crate::cli::GlobalFlags;

/// Resolve the project root from `--project`, defaulting to the current directory.
pub fn project_root(flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    let root = match &flags.project {
        Some(path) => {
            if !path.is_dir() {
                anyhow::bail!(
                    "invalid --project '{}': directory does not exist",
                    path.display()
                );
            }
            path.clone()
        }
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    std::path::absolute(&root)
        .with_context(|| format!("failed to make {} absolute", root.display()))
}

/// Load the layered configuration with command-line overrides on top.
pub fn load_config(
    project: &Path,
    flags: &GlobalFlags,
    overrides: ConfigOverrides,
) -> anyhow::Result<StemConfig> {
    StemConfig::load_dotenv(project)?;

    let figment = StemConfig::figment(project, flags.config.as_deref())?;
    let config: StemConfig = overrides
        .apply(figment)
        .extract()
        .context("failed to load stemgen configuration")?;

    Ok(config.resolve_paths(project))
}

/// Chain the configured classpath sources: inline entries, file, then env var.
pub fn classpath(config: &StemConfig) -> ChainedClasspath {
    let mut chain = ChainedClasspath::new();
    if !config.classpath.entries.is_empty() {
        chain = chain.with(StaticClasspath::new(config.classpath.entries.iter().cloned()));
    }
    if let Some(file) = &config.classpath.file {
        chain = chain.with(ClasspathFile::new(file));
    }
    if let Some(var) = &config.classpath.env {
        chain = chain.with(EnvClasspath::new(var));
    }
    chain
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            quiet: false,
            verbose: false,
            project: None,
            config: None,
        }
    }

    #[test]
    fn command_line_wins_over_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "stemgen.toml",
                r#"
                packages = ["pkg.FromFile"]
                output_directory = "out"
                "#,
            )?;
            let project = jail.directory().to_path_buf();

            let overrides = ConfigOverrides {
                packages: vec!["pkg.FromCli".to_string()],
                ..ConfigOverrides::default()
            };
            let config = load_config(&project, &flags(), overrides)
                .map_err(|error| figment::Error::from(format!("{error:#}")))?;

            assert_eq!(config.packages, vec!["pkg.FromCli"]);
            assert_eq!(config.output_directory, project.join("out"));
            assert_eq!(
                config.resources_directory,
                project.join("src/main/resources")
            );
            Ok(())
        });
    }

    #[test]
    fn explicit_config_file_replaces_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("stemgen.toml", r#"packages = ["pkg.Default"]"#)?;
            jail.create_file("ci.toml", r#"packages = ["pkg.Ci"]"#)?;
            let project = jail.directory().to_path_buf();
            let flags = GlobalFlags {
                config: Some(PathBuf::from("ci.toml")),
                ..flags()
            };

            let config = load_config(&project, &flags, ConfigOverrides::default())
                .map_err(|error| figment::Error::from(format!("{error:#}")))?;

            assert_eq!(config.packages, vec!["pkg.Ci"]);
            Ok(())
        });
    }

    #[test]
    fn classpath_chain_counts_configured_sources() {
        let mut config = StemConfig::default();
        assert!(classpath(&config).is_empty());

        config.classpath.entries = vec![PathBuf::from("/deps/a.tar")];
        config.classpath.env = Some("SCHEMA_PATH".to_string());
        assert_eq!(classpath(&config).len(), 2);
    }
}
