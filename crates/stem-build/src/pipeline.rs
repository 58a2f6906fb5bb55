use std::path::{Path, PathBuf};

use serde::Serialize;
use stem_core::{
    CodeGenerator, GenerationOptions, PackageName, SchemaCompiler, SourceRoots, SupplierList,
};
use stem_supplier::{ClasspathProvider, resolve};

use crate::compile::compile_all;
use crate::error::BuildError;
use crate::generate::generate_all;
use crate::output::ensure_and_register;

/// Validated parameters of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    output_directory: PathBuf,
    resources_directory: PathBuf,
    packages: Vec<PackageName>,
    options: GenerationOptions,
}

impl BuildRequest {
    /// # Errors
    ///
    /// `BuildError::Configuration` if `packages` is empty.
    pub fn new(
        output_directory: impl Into<PathBuf>,
        resources_directory: impl Into<PathBuf>,
        packages: Vec<PackageName>,
    ) -> Result<Self, BuildError> {
        if packages.is_empty() {
            return Err(BuildError::Configuration(
                "at least one package must be requested".to_string(),
            ));
        }
        Ok(Self {
            output_directory: output_directory.into(),
            resources_directory: resources_directory.into(),
            packages,
            options: GenerationOptions::default(),
        })
    }

    #[must_use]
    pub const fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    #[must_use]
    pub fn resources_directory(&self) -> &Path {
        &self.resources_directory
    }

    #[must_use]
    pub fn packages(&self) -> &[PackageName] {
        &self.packages
    }

    #[must_use]
    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }
}

/// What a successful run did.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub suppliers: SupplierList,
    pub packages: Vec<PackageName>,
    pub output_directory: PathBuf,
}

/// Run every stage in order, stopping at the first failure.
///
/// `connect` builds the compiler from the resolved supplier list; it is
/// called exactly once, and the same compiler is handed to the generator.
/// Nothing is generated unless every package compiled.
///
/// # Errors
///
/// The `BuildError` of the first stage that failed.
pub fn run<P, F, C, G, R>(
    request: &BuildRequest,
    classpath: &P,
    connect: F,
    generator: &G,
    roots: &mut R,
) -> Result<BuildReport, BuildError>
where
    P: ClasspathProvider + ?Sized,
    F: FnOnce(&SupplierList) -> C,
    C: SchemaCompiler,
    G: CodeGenerator<C> + ?Sized,
    R: SourceRoots + ?Sized,
{
    let suppliers = resolve(&request.resources_directory, classpath)?;
    let compiler = connect(&suppliers);

    let schemas = compile_all(&compiler, &request.packages)?;
    ensure_and_register(&request.output_directory, roots)?;
    generate_all(
        &compiler,
        generator,
        &request.options,
        &schemas,
        &request.output_directory,
    )?;

    tracing::info!(
        packages = schemas.len(),
        output = %request.output_directory.display(),
        "generation finished"
    );

    Ok(BuildReport {
        suppliers,
        packages: schemas.packages().cloned().collect(),
        output_directory: request.output_directory.clone(),
    })
}
