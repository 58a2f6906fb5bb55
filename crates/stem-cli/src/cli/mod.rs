use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stem_config::ConfigOverrides;

pub mod global;

pub use global::GlobalFlags;

/// Top-level CLI parser for the `stemgen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "stemgen",
    version,
    about = "stemgen - compile schema packages and generate code from them"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Config file to use instead of <project>/stemgen.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            config: self.config.clone(),
        }
    }
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Resolve suppliers, compile the requested packages and generate code.
    Generate(GenerateArgs),
    /// Print the dependency suppliers that would be searched.
    Suppliers(SourceArgs),
}

/// Where schema sources are looked up.
#[derive(Clone, Debug, Default, Args)]
pub struct SourceArgs {
    /// Folder searched before the classpath
    #[arg(long)]
    pub resources_directory: Option<PathBuf>,

    /// Platform path list of classpath entries
    #[arg(long)]
    pub classpath: Option<OsString>,

    /// File listing one classpath entry per line
    #[arg(long)]
    pub classpath_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Package to generate (repeatable)
    #[arg(long = "package", value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Directory generated files are written to
    #[arg(long)]
    pub output_directory: Option<PathBuf>,

    /// Generator plugin command word (repeatable, program first)
    #[arg(long = "plugin", value_name = "WORD", allow_hyphen_values = true)]
    pub plugin: Vec<String>,

    #[command(flatten)]
    pub sources: SourceArgs,
}

impl SourceArgs {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            resources_directory: self.resources_directory.clone(),
            classpath_entries: self
                .classpath
                .as_deref()
                .map(|list| {
                    std::env::split_paths(list)
                        .filter(|path| !path.as_os_str().is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            classpath_file: self.classpath_file.clone(),
            ..ConfigOverrides::default()
        }
    }
}

impl GenerateArgs {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output_directory: self.output_directory.clone(),
            packages: self.packages.clone(),
            generator_command: self.plugin.clone(),
            ..self.sources.overrides()
        }
    }
}
