//! Sources of the project's compiled classpath.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

/// Enumerates classpath entries in their original order.
///
/// An unavailable classpath is reported as an empty list; only a failure to
/// read the project's metadata is an error.
pub trait ClasspathProvider {
    /// # Errors
    ///
    /// Returns an error if the classpath metadata exists but cannot be read.
    fn entries(&self) -> anyhow::Result<Vec<PathBuf>>;
}

impl<T: ClasspathProvider + ?Sized> ClasspathProvider for &T {
    fn entries(&self) -> anyhow::Result<Vec<PathBuf>> {
        (**self).entries()
    }
}

impl<T: ClasspathProvider + ?Sized> ClasspathProvider for Box<T> {
    fn entries(&self) -> anyhow::Result<Vec<PathBuf>> {
        (**self).entries()
    }
}

/// A fixed, in-memory classpath.
#[derive(Debug, Clone, Default)]
pub struct StaticClasspath(pub Vec<PathBuf>);

impl StaticClasspath {
    #[must_use]
    pub fn new<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self(entries.into_iter().map(Into::into).collect())
    }
}

impl ClasspathProvider for StaticClasspath {
    fn entries(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}

/// A classpath listing file: one entry per line, `#` starts a comment line.
///
/// Relative entries are taken relative to the listing file's directory.
#[derive(Debug, Clone)]
pub struct ClasspathFile {
    path: PathBuf,
}

impl ClasspathFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClasspathProvider for ClasspathFile {
    fn entries(&self) -> anyhow::Result<Vec<PathBuf>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read classpath file {}", self.path.display()))?;
        let base = self.path.parent().map(PathBuf::from).unwrap_or_default();

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| base.join(line))
            .collect())
    }
}

/// A classpath held in an environment variable, in the platform's path-list
/// syntax (`:`-separated on Unix, `;` on Windows).
#[derive(Debug, Clone)]
pub struct EnvClasspath {
    var: String,
}

impl EnvClasspath {
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl ClasspathProvider for EnvClasspath {
    fn entries(&self) -> anyhow::Result<Vec<PathBuf>> {
        match std::env::var(&self.var) {
            Ok(value) => Ok(std::env::split_paths(&value)
                .filter(|path| !path.as_os_str().is_empty())
                .collect()),
            Err(std::env::VarError::NotPresent) => Ok(Vec::new()),
            Err(error) => Err(error).with_context(|| {
                format!("classpath variable {} is not valid unicode", self.var)
            }),
        }
    }
}

/// Several providers concatenated in order.
#[derive(Default)]
pub struct ChainedClasspath {
    providers: Vec<Box<dyn ClasspathProvider>>,
}

impl ChainedClasspath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, provider: impl ClasspathProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl ClasspathProvider for ChainedClasspath {
    fn entries(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for provider in &self.providers {
            entries.extend(provider.entries()?);
        }
        Ok(entries)
    }
}
