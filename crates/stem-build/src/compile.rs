use stem_core::{CompiledSchema, CompiledSchemas, PackageName, SchemaCompiler};

use crate::error::BuildError;

/// Compile every package in request order.
///
/// Stops at the first package the compiler rejects; later packages are never
/// attempted. On success the result holds exactly one entry per requested
/// name, duplicates included.
///
/// # Errors
///
/// `BuildError::Compilation` naming the first failing package.
pub fn compile_all<C>(
    compiler: &C,
    packages: &[PackageName],
) -> Result<CompiledSchemas<C::Schema>, BuildError>
where
    C: SchemaCompiler + ?Sized,
{
    tracing::info!(count = packages.len(), "compiling schema packages");

    packages
        .iter()
        .map(|package| -> Result<_, BuildError> {
            let schema = compiler
                .compile(package)
                .map_err(|error| BuildError::Compilation {
                    package: package.clone(),
                    source: error.into(),
                })?;
            tracing::info!(%package, "compiled schema package");
            Ok(CompiledSchema {
                package: package.clone(),
                schema,
            })
        })
        .collect()
}
