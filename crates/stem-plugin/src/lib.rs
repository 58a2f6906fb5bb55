//! # stem-plugin
//!
//! The engines the `stemgen` binary runs with.
//!
//! - [`SourceCompiler`] "compiles" a package by locating its source text on
//!   the supplier search path. Parsing and linking are left to the plugin.
//! - [`PluginGenerator`] hands each located schema to an external program,
//!   the way `protoc` hands requests to its plugins: one process per schema,
//!   a JSON [`GenerationRequest`] on stdin, files written by the plugin
//!   under the output directory.

mod compiler;
mod error;
mod generator;

pub use compiler::SourceCompiler;
pub use error::PluginError;
pub use generator::{ENV_OUTPUT_DIR, ENV_PACKAGE, GenerationRequest, PluginGenerator};
