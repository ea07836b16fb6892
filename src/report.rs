/*!
 * Console reporting for manifest runs
 *
 * Every user-facing line goes through [`Reporter`] so the messages can be
 * captured in tests. Diagnostics belong to the `log` macros instead.
 */

use std::io::{self, Write};
use std::path::Path;

use crate::types::{Selection, SkippedFile};

/// Report generator writing plain lines to a sink
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    /// Reporter printing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    /// Create a new reporter
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Line for a file dropped by an exclusion pattern
    pub fn skipped(&mut self, file: &SkippedFile) -> io::Result<()> {
        writeln!(
            self.out,
            "Skipping file {} because of exclude pattern.",
            file.path.display()
        )
    }

    /// One line per file dropped by an exclusion pattern
    pub fn selection(&mut self, selection: &Selection) -> io::Result<()> {
        for file in &selection.skipped {
            self.skipped(file)?;
        }
        Ok(())
    }

    /// Confirmation once the manifest is written
    pub fn created(&mut self, output_file: &Path) -> io::Result<()> {
        writeln!(self.out, "Created file {} successfully.", output_file.display())
    }

    /// Error line for a start directory that does not exist
    pub fn missing_start_dir(&mut self, dir: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "Start directory '{}' doesn't exist: exiting",
            dir.display()
        )
    }

    /// Print usage text as is
    pub fn usage(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Consume the reporter and return its sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::types::Assembly;

    #[test]
    fn test_report_lines() {
        let selection = Selection {
            assemblies: vec![Assembly::new("/t/A.Tests.dll")],
            skipped: vec![
                SkippedFile {
                    path: PathBuf::from("/t/obj/B.Tests.dll"),
                    pattern: "*/obj/*".to_string(),
                },
                SkippedFile {
                    path: PathBuf::from("/t/obj/C.Tests.dll"),
                    pattern: "*/obj/*".to_string(),
                },
            ],
        };

        let mut reporter = Reporter::new(Vec::new());
        reporter.selection(&selection).unwrap();
        reporter.created(Path::new("my.xunit")).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Skipping file /t/obj/B.Tests.dll because of exclude pattern.\n\
             Skipping file /t/obj/C.Tests.dll because of exclude pattern.\n\
             Created file my.xunit successfully.\n"
        );
    }

    #[test]
    fn test_missing_start_dir_line() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.missing_start_dir(Path::new("missing_dir")).unwrap();
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output, "Start directory 'missing_dir' doesn't exist: exiting\n");
    }
}
