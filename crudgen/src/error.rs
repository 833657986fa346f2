//! Error types for scaffold generation

use std::path::PathBuf;
use thiserror::Error;

/// Scaffold error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The entity name was empty or whitespace-only
    #[error("Entity name must not be empty")]
    EmptyName,

    /// A filesystem operation failed for a specific path
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created, written, or appended to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Project layout configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for scaffold operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
