//! Capability traits for the collaborators a build run drives.
//!
//! The schema compiler and the code generator are black boxes: stemgen only
//! sequences calls to them and decides what a failure means for the run.
//! Their causes travel as `anyhow::Error` so any engine can report whatever
//! detail it has.

use std::io;
use std::path::Path;

use crate::options::GenerationOptions;
use crate::package::PackageName;

/// Compiles one named package into an opaque schema value.
///
/// A compiler is constructed once per run from the resolved supplier list
/// and then asked for each requested package in turn.
pub trait SchemaCompiler {
    type Schema;

    /// Resolve and compile `package` against this compiler's search path.
    ///
    /// # Errors
    ///
    /// Returns an error if the package cannot be found or compiled.
    fn compile(&self, package: &PackageName) -> anyhow::Result<Self::Schema>;
}

/// Turns one compiled schema into artifacts written under `output_dir`.
///
/// The generator receives the compiler as well so it can look up other
/// packages a schema refers to.
pub trait CodeGenerator<C: SchemaCompiler + ?Sized> {
    /// # Errors
    ///
    /// Returns an error if the artifacts cannot be produced or written.
    fn generate(
        &self,
        compiler: &C,
        options: &GenerationOptions,
        schema: &C::Schema,
        output_dir: &Path,
    ) -> anyhow::Result<()>;
}

/// The enclosing build's registry of generated source roots.
///
/// Registration must be idempotent: registering a root that is already known
/// has no further effect.
pub trait SourceRoots {
    /// # Errors
    ///
    /// Returns an error if the registration cannot be delivered to the build.
    fn register(&mut self, root: &Path) -> io::Result<()>;
}

impl<T: SourceRoots + ?Sized> SourceRoots for &mut T {
    fn register(&mut self, root: &Path) -> io::Result<()> {
        (**self).register(root)
    }
}
