//! Error handling for the modblame CLI.
//!
//! The hierarchy follows a simple split:
//! - [`CliError`] is returned by every command and covers broad categories
//! - [`ConfigError`] and [`SourceError`] carry the detail for their domain
//! - conversions are automatic via `#[from]`
//!
//! Every failure is fatal: the error is reported once through miette and the
//! process exits with a non-zero status.
//!
//! # Example
//!
//! ```rust,no_run
//! use modblame_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_fixture(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod report;

use std::path::PathBuf;
use std::process::ExitStatus;

use modblame_graph::IngestError;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The edge source could not produce its output
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The edge list was malformed
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with `--config` doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a modblame.toml file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Config sources could not be merged into a valid configuration
    #[error("Invalid configuration: {0}\n\nHint: Check modblame.toml and MODBLAME_* variables for typos and wrong types")]
    Extract(String),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value:?}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(err.to_string())
    }
}

/// Failures of the external `go mod graph` process.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The go executable could not be located
    #[error("looking for {}: executable not found\n\nHint: Install Go, or point --go (or MODBLAME_GO) at the go binary", .program.display())]
    NotFound {
        /// The program that was looked up
        program: PathBuf,
    },

    /// The process exists but could not be started
    #[error("starting `{} mod graph`: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully
    #[error("`{} mod graph` failed ({status}){}", .program.display(), stderr_suffix(.stderr))]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(":\n{stderr}")
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Report a missing file as [`CliError::FileNotFound`] for `path`.
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use modblame_cli::error::{Result, ResultExt};
    /// # fn run() -> Result<()> {
    /// let path = Path::new("graph.txt");
    /// std::fs::read_to_string(path).with_path(path)?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            CliError::Io(io_err) => {
                CliError::Custom(format!("{}: {}", path.as_ref().display(), io_err))
            }
            other => other,
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
