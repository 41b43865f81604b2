//! File system placer implementation.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use super::config::PlacerConfig;
use super::error::PlacerError;
use super::traits::Placer;
use super::types::{FilePlacement, PlacedFile};

/// File system based placer implementation.
pub struct FsPlacer {
    config: PlacerConfig,
}

impl FsPlacer {
    /// Creates a new file system placer with the given configuration.
    pub fn new(config: PlacerConfig) -> Self {
        Self { config }
    }

    /// Creates a placer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlacerConfig::default())
    }

    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    async fn source_size(source: &Path) -> Result<u64, PlacerError> {
        match fs::metadata(source).await {
            Ok(meta) if meta.is_file() => Ok(meta.len()),
            Ok(_) => Err(PlacerError::SourceNotFound {
                path: source.to_path_buf(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PlacerError::SourceNotFound {
                path: source.to_path_buf(),
            }),
            Err(e) => Err(PlacerError::Io(e)),
        }
    }
}

#[async_trait]
impl Placer for FsPlacer {
    fn name(&self) -> &str {
        "fs"
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), PlacerError> {
        if self.config.dry_run {
            debug!("Dry run: would create {}", path.display());
            return Ok(());
        }

        fs::create_dir_all(path)
            .await
            .map_err(|e| PlacerError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                source: e,
            })
    }

    async fn place(&self, placement: &FilePlacement) -> Result<PlacedFile, PlacerError> {
        let size_bytes = Self::source_size(&placement.source).await?;

        if fs::try_exists(&placement.destination).await? {
            return Err(PlacerError::DestinationExists {
                path: placement.destination.clone(),
            });
        }

        if self.config.dry_run {
            info!(
                "Dry run: would link {} -> {}",
                placement.source.display(),
                placement.destination.display()
            );
            return Ok(PlacedFile {
                source: placement.source.clone(),
                destination: placement.destination.clone(),
                size_bytes,
                linked: false,
            });
        }

        // Link the file a symlinked source points at, not the symlink itself.
        let source = fs::canonicalize(&placement.source).await?;
        fs::hard_link(&source, &placement.destination)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => PlacerError::DestinationExists {
                    path: placement.destination.clone(),
                },
                _ => PlacerError::link_failed(
                    placement.source.clone(),
                    placement.destination.clone(),
                    e,
                ),
            })?;

        debug!(
            "Linked {} -> {}",
            placement.source.display(),
            placement.destination.display()
        );

        Ok(PlacedFile {
            source: placement.source.clone(),
            destination: placement.destination.clone(),
            size_bytes,
            linked: true,
        })
    }
}
