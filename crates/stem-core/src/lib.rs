//! # stem-core
//!
//! Core types, collaborator traits, and error types for stemgen.
//!
//! This crate provides the foundational types shared across all stemgen crates:
//! - Supplier descriptors and the ordered supplier search path
//! - Package names as requested by the caller
//! - Generation options applied uniformly to every compiled schema
//! - Compiled schema sequences produced once per run
//! - Capability traits for the external schema compiler, code generator,
//!   and source-root registration
//! - Cross-cutting error types

pub mod engine;
pub mod errors;
pub mod options;
pub mod package;
pub mod schema;
pub mod supplier;

pub use engine::{CodeGenerator, SchemaCompiler, SourceRoots};
pub use errors::{Cause, CoreError};
pub use options::GenerationOptions;
pub use package::PackageName;
pub use schema::{CompiledSchema, CompiledSchemas};
pub use supplier::{SupplierDescriptor, SupplierKind, SupplierList};
