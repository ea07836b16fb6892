/*!
 * Manifest generation without side effects
 *
 * Combines scanning, filtering and rendering into one call that touches the
 * file system only through the supplied [`FileSource`].
 */

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::scanner::{FileSource, Scanner};
use crate::types::Selection;
use crate::writer::XmlWriter;

/// A rendered manifest and the selection it was built from
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Kept and skipped files
    pub selection: Selection,
    /// Serialized XML document
    pub xml: Vec<u8>,
}

/// Build the manifest for the files `source` lists below `start_dir`
pub fn build(config: &Config, start_dir: &Path, source: &dyn FileSource) -> Result<Manifest> {
    let scanner = Scanner::new(config)?;
    let selection = scanner.scan(start_dir, source)?;
    let xml = XmlWriter::render(&selection.assemblies)?;

    Ok(Manifest { selection, xml })
}
