//! Compiled schema values, paired with the package they were compiled from.

use crate::package::PackageName;

/// One successfully compiled package.
///
/// The schema value itself is opaque to stemgen; it is produced by a
/// [`SchemaCompiler`](crate::SchemaCompiler) and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSchema<S> {
    pub package: PackageName,
    pub schema: S,
}

/// The ordered result of compiling every requested package.
///
/// Built once per run and never extended: it holds exactly one entry per
/// requested package, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSchemas<S> {
    entries: Box<[CompiledSchema<S>]>,
}

impl<S> CompiledSchemas<S> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledSchema<S>> {
        self.entries.iter()
    }

    /// Package names in compilation order.
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.entries.iter().map(|entry| &entry.package)
    }
}

impl<S> FromIterator<CompiledSchema<S>> for CompiledSchemas<S> {
    fn from_iter<I: IntoIterator<Item = CompiledSchema<S>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, S> IntoIterator for &'a CompiledSchemas<S> {
    type Item = &'a CompiledSchema<S>;
    type IntoIter = std::slice::Iter<'a, CompiledSchema<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
