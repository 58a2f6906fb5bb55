//! # stem-supplier
//!
//! Builds the schema search path and reads package sources from it.
//!
//! - [`resolve`] turns a local resource directory plus the project's
//!   classpath into an ordered [`SupplierList`](stem_core::SupplierList).
//! - [`ClasspathProvider`] abstracts where classpath entries come from
//!   (inline list, listing file, environment variable).
//! - [`SourceLookup`] finds a package's source text along a supplier list,
//!   reading folders directly and `.tar` / `.tar.gz` / `.tgz` archives
//!   entry by entry.

mod archive;
mod classpath;
mod error;
mod lookup;
mod resolve;

pub use classpath::{
    ChainedClasspath, ClasspathFile, ClasspathProvider, EnvClasspath, StaticClasspath,
};
pub use error::SupplierError;
pub use lookup::{DEFAULT_SOURCE_EXTENSION, SchemaSource, SourceLookup};
pub use resolve::resolve;
