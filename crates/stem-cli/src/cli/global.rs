use std::path::PathBuf;

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub quiet: bool,
    pub verbose: bool,
    pub project: Option<PathBuf>,
    pub config: Option<PathBuf>,
}
