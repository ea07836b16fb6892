/*!
 * Directory scanning and exclusion filtering
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use log::{debug, trace};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::pattern::{ExclusionSet, Wildcard};
use crate::types::{Assembly, Selection, SkippedFile};

/// Capability to list the files below a directory
///
/// The real implementation walks the file system; tests substitute an
/// in-memory listing.
pub trait FileSource {
    /// List every file under `root`, recursively, whose name matches `pattern`
    fn list_files(&self, root: &Path, pattern: &Wildcard) -> Result<Vec<PathBuf>>;
}

/// File source backed by `walkdir`
///
/// Entries within each directory are visited in file name order, so the
/// listing is deterministic for an unchanged tree.
#[derive(Debug, Clone, Default)]
pub struct WalkDirSource {
    progress: Option<Arc<ProgressBar>>,
}

impl WalkDirSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report every matching file on a progress bar, cleared once the walk ends
    pub fn with_progress(progress: Arc<ProgressBar>) -> Self {
        Self {
            progress: Some(progress),
        }
    }

    fn walk(&self, root: &Path, pattern: &Wildcard) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry?;

            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if !pattern.is_match(&name) {
                trace!("{} does not match {}", entry.path().display(), pattern);
                continue;
            }

            if let Some(progress) = &self.progress {
                progress.inc(1);
                progress.set_message(name);
            }
            files.push(entry.into_path());
        }

        Ok(files)
    }
}

impl FileSource for WalkDirSource {
    fn list_files(&self, root: &Path, pattern: &Wildcard) -> Result<Vec<PathBuf>> {
        let files = self.walk(root, pattern);

        // Clear on failure too
        if let Some(progress) = &self.progress {
            progress.finish_and_clear();
        }
        files
    }
}

/// Scanner selecting manifest entries below a start directory
pub struct Scanner {
    /// Wildcard matched against file names
    search: Wildcard,
    /// Exclusion predicates applied to full paths
    exclusions: ExclusionSet,
    /// Absolute manifest path, never listed in its own output
    output_file: PathBuf,
}

impl Scanner {
    /// Create a new scanner from the configured patterns
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            search: Wildcard::file_name(&config.search_pattern)?,
            exclusions: ExclusionSet::new(&config.exclude_patterns)?,
            output_file: std::path::absolute(&config.output_file)?,
        })
    }

    /// Enumerate candidates under `root` and split them into kept and skipped files
    pub fn scan(&self, root: &Path, source: &dyn FileSource) -> Result<Selection> {
        debug!(
            "Scanning {} for '{}' with {} exclusion pattern(s)",
            root.display(),
            self.search,
            self.exclusions.len()
        );

        let candidates = source.list_files(root, &self.search)?;
        let selection = self.filter(candidates);

        debug!(
            "Selected {} of {} candidate file(s)",
            selection.assemblies.len(),
            selection.candidates()
        );
        Ok(selection)
    }

    /// Apply the exclusion predicates, preserving candidate order
    pub fn filter(&self, candidates: Vec<PathBuf>) -> Selection {
        let mut selection = Selection::default();

        for path in candidates {
            if self.is_output_file(&path) {
                debug!("Ignoring manifest output {}", path.display());
                continue;
            }

            let full_path = path.to_string_lossy().into_owned();
            match self.exclusions.first_match(&full_path) {
                Some(pattern) => {
                    debug!("Excluding {} (matched '{}')", full_path, pattern);
                    selection.skipped.push(SkippedFile {
                        pattern: pattern.as_str().to_string(),
                        path,
                    });
                }
                None => {
                    trace!("Including {}", full_path);
                    selection.assemblies.push(Assembly::new(path));
                }
            }
        }

        selection
    }

    /// Check whether a candidate is the manifest being generated
    ///
    /// The output may not exist yet, so plain path equality is tried before
    /// comparing canonical paths.
    fn is_output_file(&self, path: &Path) -> bool {
        if path == self.output_file {
            return true;
        }
        if path.file_name() != self.output_file.file_name() {
            return false;
        }
        match (fs::canonicalize(path), fs::canonicalize(&self.output_file)) {
            (Ok(candidate), Ok(output)) => candidate == output,
            _ => false,
        }
    }
}
