use anyhow::Context;

use crate::bootstrap;
use crate::cli::{GlobalFlags, SourceArgs};
use crate::output::output;

/// Handle `stemgen suppliers`.
pub fn handle(args: &SourceArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = bootstrap::project_root(flags)?;
    let config = bootstrap::load_config(&project, flags, args.overrides())?;

    let suppliers = stem_supplier::resolve(
        &config.resources_directory,
        &bootstrap::classpath(&config),
    )
    .context("failed to resolve schema suppliers")?;

    output(&suppliers)
}
