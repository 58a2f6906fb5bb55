//! # stem-build
//!
//! Drives one stemgen run: resolve suppliers, compile every requested
//! package, prepare the output directory, and generate sources.
//!
//! Every stage is sequential and fail-fast. The first failure ends the run
//! with a [`BuildError`]; there is no retry and no partial success.
//! Generation is not transactional: files written for earlier schemas stay
//! on disk when a later schema fails.
//!
//! The stages are usable on their own ([`compile_all`],
//! [`ensure_and_register`], [`generate_all`]) or chained by [`run`].

mod compile;
mod error;
mod generate;
mod output;
mod pipeline;
mod roots;

pub use compile::compile_all;
pub use error::BuildError;
pub use generate::generate_all;
pub use output::ensure_and_register;
pub use pipeline::{BuildReport, BuildRequest, run};
pub use roots::{CargoSourceRoots, SourceRootSet};
