//! Cross-cutting error types for stemgen.
//!
//! Stage failures of a build run live in `stem-build` (`BuildError`); this
//! module only holds errors raised while constructing core values.

use thiserror::Error;

/// An opaque underlying cause, boxed so it can sit in a `#[source]` field.
///
/// Collaborators report `anyhow::Error`; it converts with `.into()` and keeps
/// its context chain.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A requested package name does not have an acceptable shape.
    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },
}
