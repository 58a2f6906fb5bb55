use std::io::{Seek, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use serde::Serialize;
use stem_core::{CodeGenerator, GenerationOptions, PackageName, SchemaCompiler, SupplierDescriptor};
use stem_supplier::SchemaSource;

use crate::error::PluginError;

/// Environment variable naming the output directory for the plugin.
pub const ENV_OUTPUT_DIR: &str = "STEMGEN_OUTPUT_DIR";
/// Environment variable naming the package being generated.
pub const ENV_PACKAGE: &str = "STEMGEN_PACKAGE";

/// The JSON document a plugin reads from stdin.
#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub package: &'a PackageName,
    pub origin: &'a SupplierDescriptor,
    pub source: &'a str,
    pub options: &'a GenerationOptions,
    pub output_dir: &'a Path,
}

/// Runs an external program once per schema.
///
/// The request is staged in a temporary file that becomes the plugin's
/// stdin, so the plugin may read, write and log in any order. A non-zero exit
/// fails the schema with the plugin's stderr attached.
#[derive(Debug, Clone)]
pub struct PluginGenerator {
    program: String,
    args: Vec<String>,
}

impl PluginGenerator {
    /// Build from a command line: program first, then its arguments.
    ///
    /// # Errors
    ///
    /// `PluginError::NoCommand` if the command is empty or the program blank.
    pub fn new(command: &[String]) -> Result<Self, PluginError> {
        let (program, args) = command.split_first().ok_or(PluginError::NoCommand)?;
        if program.trim().is_empty() {
            return Err(PluginError::NoCommand);
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn invoke(&self, request: &GenerationRequest<'_>) -> Result<(), PluginError> {
        let io_error = |source: std::io::Error| PluginError::Io {
            program: self.program.clone(),
            source,
        };
        let payload = serde_json::to_vec(request).map_err(|error| io_error(error.into()))?;
        let mut stdin = tempfile::tempfile().map_err(io_error)?;
        stdin.write_all(&payload).map_err(io_error)?;
        stdin.rewind().map_err(io_error)?;

        tracing::debug!(program = %self.program, package = %request.package, "starting generator plugin");
        let child = Command::new(&self.program)
            .args(&self.args)
            .env(ENV_OUTPUT_DIR, request.output_dir)
            .env(ENV_PACKAGE, request.package.as_str())
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| PluginError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let output = child.wait_with_output().map_err(io_error)?;
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            tracing::debug!(program = %self.program, "{line}");
        }

        if output.status.success() {
            if !stderr.is_empty() {
                tracing::warn!(program = %self.program, package = %request.package, "{stderr}");
            }
            Ok(())
        } else {
            Err(PluginError::Failed {
                program: self.program.clone(),
                package: request.package.clone(),
                status: output.status.to_string(),
                stderr,
            })
        }
    }
}

impl<C> CodeGenerator<C> for PluginGenerator
where
    C: SchemaCompiler<Schema = SchemaSource> + ?Sized,
{
    fn generate(
        &self,
        _compiler: &C,
        options: &GenerationOptions,
        schema: &SchemaSource,
        output_dir: &Path,
    ) -> anyhow::Result<()> {
        let request = GenerationRequest {
            package: &schema.package,
            origin: &schema.origin,
            source: &schema.text,
            options,
            output_dir,
        };
        self.invoke(&request)?;
        Ok(())
    }
}
