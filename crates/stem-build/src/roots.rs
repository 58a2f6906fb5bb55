//! Source-root registries for the enclosing build.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use stem_core::SourceRoots;

/// In-memory, ordered, de-duplicated set of registered roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourceRootSet {
    roots: Vec<PathBuf>,
}

impl SourceRootSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    #[must_use]
    pub fn contains(&self, root: &Path) -> bool {
        self.roots.iter().any(|known| known == root)
    }
}

impl SourceRoots for SourceRootSet {
    fn register(&mut self, root: &Path) -> io::Result<()> {
        if !self.contains(root) {
            self.roots.push(root.to_path_buf());
        }
        Ok(())
    }
}

/// Publishes roots to Cargo from a build script.
///
/// Each distinct root is emitted once as `cargo:rustc-env=<VAR>=<root>`, so
/// the crate being built can `include!(concat!(env!("VAR"), "/file.rs"))`.
/// When several roots are registered under one variable the last one wins.
#[derive(Debug)]
pub struct CargoSourceRoots<W = io::Stdout> {
    env_var: String,
    out: W,
    emitted: SourceRootSet,
}

impl CargoSourceRoots<io::Stdout> {
    /// Emit directives on stdout, where Cargo reads them.
    #[must_use]
    pub fn stdout(env_var: impl Into<String>) -> Self {
        Self::new(env_var, io::stdout())
    }
}

impl<W: Write> CargoSourceRoots<W> {
    #[must_use]
    pub fn new(env_var: impl Into<String>, out: W) -> Self {
        Self {
            env_var: env_var.into(),
            out,
            emitted: SourceRootSet::new(),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SourceRoots for CargoSourceRoots<W> {
    fn register(&mut self, root: &Path) -> io::Result<()> {
        if self.emitted.contains(root) {
            return Ok(());
        }
        writeln!(self.out, "cargo:rustc-env={}={}", self.env_var, root.display())?;
        self.emitted.register(root)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn set_ignores_duplicates() {
        let mut set = SourceRootSet::new();
        set.register(Path::new("/gen/a")).expect("infallible");
        set.register(Path::new("/gen/b")).expect("infallible");
        set.register(Path::new("/gen/a")).expect("infallible");

        assert_eq!(
            set.roots(),
            &[PathBuf::from("/gen/a"), PathBuf::from("/gen/b")]
        );
    }

    #[test]
    fn cargo_directive_is_emitted_once() {
        let mut roots = CargoSourceRoots::new("STEMGEN_OUT_DIR", Vec::new());
        roots.register(Path::new("/gen/out")).expect("writes to vec");
        roots.register(Path::new("/gen/out")).expect("writes to vec");

        let written = String::from_utf8(roots.into_inner()).expect("utf8");
        assert_eq!(written, "cargo:rustc-env=STEMGEN_OUT_DIR=/gen/out\n");
    }

    #[test]
    fn set_serializes_as_path_list() {
        let mut set = SourceRootSet::new();
        set.register(Path::new("/gen/a")).expect("infallible");
        let json = serde_json::to_value(&set).expect("serialize");
        assert_eq!(json, serde_json::json!(["/gen/a"]));
    }
}
