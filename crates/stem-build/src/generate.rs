use std::path::Path;

use stem_core::{CodeGenerator, CompiledSchemas, GenerationOptions, SchemaCompiler};

use crate::error::BuildError;

/// Run the generator over every compiled schema, in compilation order.
///
/// Stops at the first failing schema. Nothing is rolled back: artifacts the
/// generator already wrote for earlier schemas stay under `output_dir`.
///
/// # Errors
///
/// `BuildError::Generation` naming the first package whose generation failed.
pub fn generate_all<C, G>(
    compiler: &C,
    generator: &G,
    options: &GenerationOptions,
    schemas: &CompiledSchemas<C::Schema>,
    output_dir: &Path,
) -> Result<(), BuildError>
where
    C: SchemaCompiler + ?Sized,
    G: CodeGenerator<C> + ?Sized,
{
    for compiled in schemas {
        generator
            .generate(compiler, options, &compiled.schema, output_dir)
            .map_err(|error| BuildError::Generation {
                package: compiled.package.clone(),
                source: error.into(),
            })?;
        tracing::info!(package = %compiled.package, "generated sources");
    }
    Ok(())
}
