/*!
 * Command-line interface for xunit-manifest
 */

use std::io;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, LevelFilter};

use xunit_manifest::config::{self, Args, Config};
use xunit_manifest::report::Reporter;
use xunit_manifest::run::{run, Outcome};
use xunit_manifest::scanner::WalkDirSource;

fn main() -> io::Result<()> {
    let mut reporter = Reporter::stdout();

    // Parse command line arguments; bad input prints usage and exits cleanly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            init_logging(LevelFilter::Warn);
            debug!("Argument error: {}", e);
            return reporter.usage(&config::usage());
        }
    };

    if let Some(shell) = args.generate {
        let mut command = Args::command();
        clap_complete::generate(shell, &mut command, "xunit-manifest", &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(LevelFilter::Warn);
            debug!("{}", e);
            return reporter.usage(&config::usage());
        }
    };
    init_logging(config.log_level);

    // Spinner on stderr while walking the tree
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {pos} found {wide_msg:.dim}")
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
    );
    progress.set_prefix("Scanning");

    let source = WalkDirSource::with_progress(Arc::new(progress));

    match run(&config, &source, &mut reporter)? {
        Outcome::Success(path) => debug!("Manifest written to {}", path.display()),
        Outcome::Aborted => debug!("Run aborted before scanning"),
    }

    Ok(())
}

/// Initialize logging; `RUST_LOG` overrides the command-line level
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
