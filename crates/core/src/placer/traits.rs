//! Trait definitions for the placer module.

use std::path::Path;

use async_trait::async_trait;

use super::error::PlacerError;
use super::types::{FilePlacement, PlacedFile};

/// A placer that files archives at their library destinations.
#[async_trait]
pub trait Placer: Send + Sync {
    /// Returns the name of this placer implementation.
    fn name(&self) -> &str;

    /// Creates `path` and its parents. Calling it for an existing directory is not an error.
    async fn ensure_dir(&self, path: &Path) -> Result<(), PlacerError>;

    /// Places a single file.
    async fn place(&self, placement: &FilePlacement) -> Result<PlacedFile, PlacerError>;
}
