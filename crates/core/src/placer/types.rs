//! Placement requests and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One archive to link into the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlacement {
    /// Archive inside the import directory.
    pub source: PathBuf,
    /// Normalized path under the series directory.
    pub destination: PathBuf,
}

/// Outcome of a successful placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedFile {
    /// Source file path.
    pub source: PathBuf,
    /// Final destination path.
    pub destination: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// False when the placement was only planned (dry run).
    pub linked: bool,
}
