//! Error types for notepub.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for notepub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning notes or materializing links.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure tied to a specific path
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A required file or directory does not exist
    #[error("{kind} not found: {path}")]
    NotFound {
        /// What was being looked up (e.g. "notes directory")
        kind: String,
        /// Path that was missing
        path: String,
    },

    /// Configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Wrap an I/O error together with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a not-found error for `path`, describing it as `kind`.
    pub fn not_found(path: impl Into<String>, kind: impl Into<String>) -> Self {
        Error::NotFound {
            kind: kind.into(),
            path: path.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }

    /// Returns `true` if this error means the target simply does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Error::Config(_) | Error::Parse(_) => false,
        }
    }
}
