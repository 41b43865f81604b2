//! Types for the importer.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::external_catalog::ExternalCatalogError;
use crate::placer::{PlacedFile, PlacerError};
use crate::presenter::PresenterError;

/// Errors that end the import of a directory.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Catalog search failed. Nothing useful can be done without candidates.
    #[error("catalog search failed: {0}")]
    Catalog(#[from] ExternalCatalogError),

    /// The operator prompt failed or was closed.
    #[error("selection failed: {0}")]
    Presenter(#[from] PresenterError),

    /// The series directory could not be created.
    #[error("placer error: {0}")]
    Placer(#[from] PlacerError),

    /// The import directory could not be listed.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing is left of the directory name after cleaning.
    #[error("directory name of {0} is empty after cleaning")]
    EmptyName(PathBuf),

    /// Writing progress output failed.
    #[error("console output failed: {0}")]
    Output(#[from] std::io::Error),
}

impl ImportError {
    /// Whether the whole run should stop rather than move to the next directory.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Catalog(_))
    }
}

/// A file that could not be placed.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: String,
}

/// Outcome of importing one directory.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    /// The directory that was imported.
    pub directory: PathBuf,
    /// Canonical title bound to every file of the directory.
    pub title: String,
    /// Series directory inside the library.
    pub series_dir: PathBuf,
    /// Files placed (or planned, in dry-run mode).
    pub placed: Vec<PlacedFile>,
    /// Entries ignored because they are not archives.
    pub skipped: usize,
    /// Archives for which no chapter or volume was recognized.
    pub unnumbered: usize,
    /// Archives that could not be placed.
    pub failures: Vec<FileFailure>,
}

impl ImportReport {
    /// True when every archive was placed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
