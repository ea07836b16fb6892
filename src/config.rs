/*!
 * Configuration handling for xunit-manifest
 */

use std::env;
use std::path::{self, PathBuf};

use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use log::LevelFilter;

use crate::ensure;
use crate::error::{ManifestError, Result};

/// Heading shown at the top of the usage text
pub const HEADING: &str = "XUnit Project File Creator";

const USAGE_PREAMBLE: &str = "The command line arguments are incorrect. \
Please make sure that all required arguments are specified:";

const USAGE_EXAMPLE: &str = "Example:\n\n  \
xunit-manifest -p *test*.dll -o myproject.xunit -e */obj/*,*acceptancetests*";

/// Command-line arguments for xunit-manifest
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "xunit-manifest",
    version = env!("CARGO_PKG_VERSION"),
    about = HEADING,
    long_about = "Scans a directory tree for test assemblies and writes an xUnit project file listing them.",
    after_help = USAGE_EXAMPLE
)]
pub struct Args {
    /// Search pattern
    #[clap(short = 'p', value_name = "PATTERN", default_value = "*")]
    pub search_pattern: String,

    /// Output file name
    #[clap(short = 'o', value_name = "FILE", required_unless_present = "generate")]
    pub output_file: Option<String>,

    /// Start directory
    #[clap(short = 's', value_name = "DIR")]
    pub start_directory: Option<String>,

    /// Comma separated list of exclude patterns
    #[clap(short = 'e', value_name = "PATTERNS", value_delimiter = ',')]
    pub exclude_patterns: Vec<String>,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[clap(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Usage text printed when the command line cannot be parsed
pub fn usage() -> String {
    let template = format!(
        "{}\n{}\n\n{{usage-heading}} {{usage}}\n\n{{all-args}}{{after-help}}",
        HEADING, USAGE_PREAMBLE
    );
    Args::command().help_template(template).render_help().to_string()
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Wildcard matched against file names
    pub search_pattern: String,

    /// Output manifest path
    pub output_file: PathBuf,

    /// Directory to scan (current directory if unset)
    pub start_dir: Option<PathBuf>,

    /// Trimmed, non-empty exclusion patterns
    pub exclude_patterns: Vec<String>,

    /// Log level requested on the command line
    pub log_level: LevelFilter,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let output_file = args.output_file.unwrap_or_default();
        ensure!(!output_file.trim().is_empty(), Config, "output file (-o) is required");

        let search_pattern = match args.search_pattern.trim() {
            "" => "*".to_string(),
            pattern => pattern.to_string(),
        };

        Ok(Self {
            search_pattern,
            output_file: PathBuf::from(output_file),
            start_dir: args
                .start_directory
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            exclude_patterns: args
                .exclude_patterns
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect(),
            log_level: match args.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            },
        })
    }

    /// Resolve the directory to scan
    ///
    /// An explicit start directory must exist. The result is made absolute
    /// without resolving symlinks, so manifest paths keep the directory names
    /// the user passed and exclusion patterns can match them.
    pub fn resolve_start_dir(&self) -> Result<PathBuf> {
        let dir = match &self.start_dir {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(ManifestError::StartDirNotFound(dir.clone()));
                }
                dir.clone()
            }
            None => env::current_dir()?,
        };

        Ok(path::absolute(dir)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("xunit-manifest").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(parse(&["-o", "out.xunit"])).unwrap();
        assert_eq!(config.search_pattern, "*");
        assert_eq!(config.output_file, PathBuf::from("out.xunit"));
        assert!(config.start_dir.is_none());
        assert!(config.exclude_patterns.is_empty());
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_exclusions_are_split_and_trimmed() {
        let args = parse(&["-o", "out.xunit", "-e", r" *\obj\* , *acceptancetests*,,"]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.exclude_patterns, vec![r"*\obj\*", "*acceptancetests*"]);
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&["-p", "*test*.dll", "-o", "my.xunit", "-s", "src", "-vv"]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.search_pattern, "*test*.dll");
        assert_eq!(config.start_dir, Some(PathBuf::from("src")));
        assert_eq!(config.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_missing_output_is_a_parse_error() {
        let result = Args::try_parse_from(["xunit-manifest", "-p", "*.dll"]);
        assert!(result.is_err());

        // Completions do not need an output file
        let args = Args::try_parse_from(["xunit-manifest", "--generate", "bash"]).unwrap();
        assert!(args.output_file.is_none());
        assert!(Config::from_args(args).is_err());
    }

    #[test]
    fn test_unknown_flag_is_a_parse_error() {
        assert!(Args::try_parse_from(["xunit-manifest", "-o", "x", "-z"]).is_err());
    }

    #[test]
    fn test_usage_text() {
        let text = usage();
        assert!(text.starts_with(HEADING));
        assert!(text.contains("The command line arguments are incorrect"));
        assert!(text.contains("Comma separated list of exclude patterns"));
        assert!(text.contains("Example:"));
    }

    #[test]
    fn test_resolve_missing_start_dir() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing_dir");
        let config = Config::from_args(parse(&["-o", "x", "-s", missing.to_str().unwrap()])).unwrap();

        match config.resolve_start_dir() {
            Err(ManifestError::StartDirNotFound(dir)) => assert_eq!(dir, missing),
            other => panic!("expected StartDirNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_start_dir_is_absolute() {
        let temp = tempdir().unwrap();
        let config = Config::from_args(parse(&["-o", "x", "-s", temp.path().to_str().unwrap()])).unwrap();
        let resolved = config.resolve_start_dir().unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, temp.path());
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_keeps_symlinked_start_dir() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        File::create(temp.path().join("real").join("A.Tests.dll")).unwrap();
        let link = temp.path().join("build");
        std::os::unix::fs::symlink(temp.path().join("real"), &link).unwrap();

        let config = Config::from_args(parse(&["-o", "x", "-s", link.to_str().unwrap()])).unwrap();
        assert_eq!(config.resolve_start_dir().unwrap(), link);
    }

    #[test]
    fn test_resolve_defaults_to_current_dir() {
        let config = Config::from_args(parse(&["-o", "x"])).unwrap();
        let resolved = config.resolve_start_dir().unwrap();
        assert_eq!(resolved, env::current_dir().unwrap());
    }
}
