/*!
 * Core types and data structures for manifest generation
 */

use std::path::{Path, PathBuf};

/// A test assembly selected for the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// Full path of the assembly file
    pub path: PathBuf,
}

impl Assembly {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path as written into the `filename` attribute
    pub fn filename(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// A candidate file dropped by an exclusion pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Full path of the skipped file
    pub path: PathBuf,
    /// The exclusion pattern that matched first
    pub pattern: String,
}

/// Outcome of enumerating and filtering a directory tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Files kept for the manifest, in enumeration order
    pub assemblies: Vec<Assembly>,
    /// Files dropped by exclusion patterns, in enumeration order
    pub skipped: Vec<SkippedFile>,
}

impl Selection {
    /// Number of candidates that matched the search pattern
    pub fn candidates(&self) -> usize {
        self.assemblies.len() + self.skipped.len()
    }

    /// Check whether the given path was kept
    pub fn contains(&self, path: &Path) -> bool {
        self.assemblies.iter().any(|a| a.path == path)
    }
}
