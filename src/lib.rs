/*!
 * xunit-manifest - Generate xUnit project files from a directory tree
 *
 * This library finds test assemblies below a start directory, drops the ones
 * matching exclusion wildcards, and writes the rest into an xUnit project
 * file for a test runner.
 */

pub mod config;
pub mod error;
pub mod manifest;
pub mod pattern;
pub mod report;
pub mod run;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{ManifestError, Result};
pub use manifest::Manifest;
pub use pattern::{ExclusionSet, Wildcard};
pub use report::Reporter;
pub use run::{run, Outcome, RunState};
pub use scanner::{FileSource, Scanner, WalkDirSource};
pub use types::{Assembly, Selection, SkippedFile};
pub use writer::XmlWriter;
