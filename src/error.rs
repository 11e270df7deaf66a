//! Error types for the macro bundler.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors raised while listing, reading, or writing bundle files
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Cannot read folder '{folder}' at {}: {source}", path.display())]
    FolderUnreadable {
        folder: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configured folder '{folder}' is not a directory: {}", path.display())]
    NotAFolder { folder: String, path: PathBuf },

    #[error("Folder entry is not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BundleError {
    /// Underlying I/O error, when the failure came from the operating system.
    pub fn io_source(&self) -> Option<&std::io::Error> {
        match self {
            BundleError::FolderUnreadable { source, .. }
            | BundleError::ReadFailed { source, .. }
            | BundleError::WriteFailed { source, .. } => Some(source),
            BundleError::NotAFolder { .. } | BundleError::NotAFile { .. } => None,
        }
    }
}

/// Command-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Bundle(#[from] BundleError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// `report` is the rendered check report, printed to stdout by the binary.
    #[error("Outputs out of date: {}. Run `macrobundle build` to regenerate.", .files.join(", "))]
    OutputsStale { files: Vec<String>, report: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CommandError {
    /// Output meant for stdout even though the command failed.
    pub fn stdout_report(&self) -> Option<&str> {
        match self {
            CommandError::OutputsStale { report, .. } => Some(report.as_str()),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for CommandError {
    fn from(err: config::ConfigError) -> Self {
        CommandError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for CommandError {
    fn from(err: toml::ser::Error) -> Self {
        CommandError::Serialization(err.to_string())
    }
}
