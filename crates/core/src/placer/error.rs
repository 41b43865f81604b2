//! Error types for the placer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while filing archives into the library.
#[derive(Debug, Error)]
pub enum PlacerError {
    /// Source file not found.
    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Destination already exists.
    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// Failed to create destination directory.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to hard-link the file.
    #[error("Failed to link {source} to {destination}: {error}")]
    LinkFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlacerError {
    pub fn link_failed(source: PathBuf, destination: PathBuf, error: std::io::Error) -> Self {
        Self::LinkFailed {
            source,
            destination,
            error,
        }
    }
}
