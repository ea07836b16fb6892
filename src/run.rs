/*!
 * A single manifest generation run
 *
 * The run validates the start directory, then scans, filters and writes in
 * one linear pass. There is no retry and no rollback.
 */

use std::io::Write;
use std::path::PathBuf;

use log::{debug, info};

use crate::config::Config;
use crate::error::{ManifestError, Result};
use crate::manifest;
use crate::report::Reporter;
use crate::scanner::FileSource;
use crate::writer::XmlWriter;

/// Phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Checking that the start directory exists
    Validating,
    /// Enumerating, filtering and writing
    Running,
}

/// Terminal state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The manifest was written to this path
    Success(PathBuf),
    /// The start directory was missing; nothing was written
    Aborted,
}

/// Generate the manifest described by `config`
///
/// A missing start directory is reported and ends the run as
/// [`Outcome::Aborted`]. Enumeration and write failures are returned as
/// errors and may leave a partially written output file behind.
pub fn run<W: Write>(
    config: &Config,
    source: &dyn FileSource,
    reporter: &mut Reporter<W>,
) -> Result<Outcome> {
    let mut state = RunState::Validating;
    debug!("{:?}: start directory {:?}", state, config.start_dir);

    let start_dir = match config.resolve_start_dir() {
        Ok(dir) => dir,
        Err(ManifestError::StartDirNotFound(dir)) => {
            reporter.missing_start_dir(&dir)?;
            return Ok(Outcome::Aborted);
        }
        Err(e) => return Err(e),
    };

    state = RunState::Running;
    debug!("{:?}: scanning {}", state, start_dir.display());

    let manifest = manifest::build(config, &start_dir, source)?;
    reporter.selection(&manifest.selection)?;

    let writer = XmlWriter::new(&config.output_file);
    writer.write_document(&manifest.xml)?;
    info!(
        "Wrote {} assembly entries to {}",
        manifest.selection.assemblies.len(),
        writer.output_file().display()
    );

    reporter.created(&config.output_file)?;
    Ok(Outcome::Success(config.output_file.clone()))
}
