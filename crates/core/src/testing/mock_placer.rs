//! Mock placer for testing.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::placer::{FilePlacement, PlacedFile, Placer, PlacerError};

/// A recorded placement for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedPlacement {
    /// The placement that was requested.
    pub placement: FilePlacement,
    /// Whether the placement succeeded.
    pub success: bool,
}

/// Mock implementation of the Placer trait.
///
/// Provides controllable behavior for testing:
/// - Track placements and created directories for assertions
/// - Fail specific destinations
/// - Simulate existing destinations
///
/// # Example
///
/// ```rust,ignore
/// use scarlet_core::testing::MockPlacer;
///
/// let placer = MockPlacer::new();
/// placer.place(&placement).await?;
///
/// let placements = placer.recorded_placements().await;
/// assert_eq!(placements.len(), 1);
/// assert!(placements[0].success);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPlacer {
    /// Recorded placements.
    placements: Arc<RwLock<Vec<RecordedPlacement>>>,
    /// Directories passed to `ensure_dir` (deduplicated).
    directories: Arc<RwLock<BTreeSet<PathBuf>>>,
    /// Destinations that fail with a link error.
    failing: Arc<RwLock<HashSet<PathBuf>>>,
    /// Destinations treated as already placed.
    placed: Arc<RwLock<HashSet<PathBuf>>>,
    /// If set, `ensure_dir` fails.
    fail_directories: Arc<RwLock<bool>>,
}

impl MockPlacer {
    /// Create a new mock placer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded placements.
    pub async fn recorded_placements(&self) -> Vec<RecordedPlacement> {
        self.placements.read().await.clone()
    }

    /// Get the number of successful placements.
    pub async fn placed_count(&self) -> usize {
        self.placements
            .read()
            .await
            .iter()
            .filter(|p| p.success)
            .count()
    }

    /// Directories that were ensured.
    pub async fn created_directories(&self) -> Vec<PathBuf> {
        self.directories.read().await.iter().cloned().collect()
    }

    /// Make placements to `destination` fail.
    pub async fn fail_destination(&self, destination: impl Into<PathBuf>) {
        self.failing.write().await.insert(destination.into());
    }

    /// Make every `ensure_dir` call fail.
    pub async fn set_fail_directories(&self, fail: bool) {
        *self.fail_directories.write().await = fail;
    }

    async fn record(&self, placement: &FilePlacement, success: bool) {
        self.placements.write().await.push(RecordedPlacement {
            placement: placement.clone(),
            success,
        });
    }
}

#[async_trait]
impl Placer for MockPlacer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), PlacerError> {
        if *self.fail_directories.read().await {
            return Err(PlacerError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock failure"),
            });
        }
        self.directories.write().await.insert(path.to_path_buf());
        Ok(())
    }

    async fn place(&self, placement: &FilePlacement) -> Result<PlacedFile, PlacerError> {
        if self.failing.read().await.contains(&placement.destination) {
            self.record(placement, false).await;
            return Err(PlacerError::link_failed(
                placement.source.clone(),
                placement.destination.clone(),
                io::Error::other("mock failure"),
            ));
        }

        if !self.placed.write().await.insert(placement.destination.clone()) {
            self.record(placement, false).await;
            return Err(PlacerError::DestinationExists {
                path: placement.destination.clone(),
            });
        }

        self.record(placement, true).await;
        Ok(PlacedFile {
            source: placement.source.clone(),
            destination: placement.destination.clone(),
            size_bytes: 0,
            linked: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(dest: &str) -> FilePlacement {
        FilePlacement {
            source: PathBuf::from("/incoming/src.cbz"),
            destination: PathBuf::from(dest),
        }
    }

    #[tokio::test]
    async fn test_records_placements() {
        let placer = MockPlacer::new();
        placer.place(&placement("/lib/a.cbz")).await.unwrap();

        let recorded = placer.recorded_placements().await;
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].success);
        assert_eq!(placer.placed_count().await, 1);
    }

    #[tokio::test]
    async fn test_failing_destination() {
        let placer = MockPlacer::new();
        placer.fail_destination("/lib/bad.cbz").await;

        let result = placer.place(&placement("/lib/bad.cbz")).await;
        assert!(matches!(result, Err(PlacerError::LinkFailed { .. })));
        assert_eq!(placer.placed_count().await, 0);
    }

    #[tokio::test]
    async fn test_second_placement_to_same_destination_fails() {
        let placer = MockPlacer::new();
        placer.place(&placement("/lib/a.cbz")).await.unwrap();
        let result = placer.place(&placement("/lib/a.cbz")).await;
        assert!(matches!(result, Err(PlacerError::DestinationExists { .. })));
    }

    #[tokio::test]
    async fn test_ensure_dir_deduplicates() {
        let placer = MockPlacer::new();
        placer.ensure_dir(Path::new("/lib/One Piece")).await.unwrap();
        placer.ensure_dir(Path::new("/lib/One Piece")).await.unwrap();
        assert_eq!(
            placer.created_directories().await,
            vec![PathBuf::from("/lib/One Piece")]
        );
    }
}
