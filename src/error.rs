//! Global error handling for xunit-manifest
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for manifest generation
#[derive(Error, Debug)]
pub enum ManifestError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Wildcard compilation errors
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Start directory does not exist
    #[error("Start directory '{}' doesn't exist", .0.display())]
    StartDirNotFound(PathBuf),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for manifest operations
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Creates a ManifestError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::ManifestError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// main returns io::Result, so fatal errors need to cross that boundary
impl From<ManifestError> for io::Error {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::Io(e) => e,
            other => {
                let kind = match other {
                    ManifestError::StartDirNotFound(_) => io::ErrorKind::NotFound,
                    _ => io::ErrorKind::Other,
                };
                io::Error::new(kind, other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_flag(flag: bool) -> Result<()> {
        ensure!(flag, Config, "flag was {}", flag);
        Ok(())
    }

    #[test]
    fn test_ensure_macro() {
        assert!(check_flag(true).is_ok());
        let err = check_flag(false).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: flag was false");
    }

    #[test]
    fn test_start_dir_message() {
        let err = ManifestError::StartDirNotFound(PathBuf::from("missing_dir"));
        assert_eq!(err.to_string(), "Start directory 'missing_dir' doesn't exist");

        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }
}
