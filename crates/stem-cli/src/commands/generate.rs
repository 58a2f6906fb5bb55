use anyhow::Context;
use serde::Serialize;
use stem_build::{BuildReport, BuildRequest, SourceRootSet};
use stem_config::StemConfig;
use stem_plugin::{PluginGenerator, SourceCompiler};

use crate::bootstrap;
use crate::cli::{GenerateArgs, GlobalFlags};
use crate::output::output;

/// The build report plus the source roots the next build step should compile.
#[derive(Debug, Serialize)]
struct GenerateResponse {
    #[serde(flatten)]
    report: BuildReport,
    source_roots: SourceRootSet,
}

/// Handle `stemgen generate`.
pub fn handle(args: &GenerateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = bootstrap::project_root(flags)?;
    let config = bootstrap::load_config(&project, flags, args.overrides())?;

    let response = run(&config).context("error while generating code")?;
    output(&response)
}

fn run(config: &StemConfig) -> anyhow::Result<GenerateResponse> {
    let request = BuildRequest::new(
        &config.output_directory,
        &config.resources_directory,
        config.package_names()?,
    )?
    .with_options(config.generation.options());

    let generator = PluginGenerator::new(&config.generator.command)
        .context("set [generator] command in stemgen.toml or pass --plugin")?;
    let extension = config.generation.source_extension.as_str();
    let mut source_roots = SourceRootSet::new();

    let report = stem_build::run(
        &request,
        &bootstrap::classpath(config),
        |suppliers| SourceCompiler::with_extension(suppliers, extension),
        &generator,
        &mut source_roots,
    )?;

    Ok(GenerateResponse {
        report,
        source_roots,
    })
}
