//! Resolution of the directories to import.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tokio::fs;

/// Directories to import, in processing order.
///
/// Explicit directories are used as given. Otherwise every subdirectory of
/// `import_dir` is returned, sorted by name.
pub async fn import_targets(dirs: Vec<PathBuf>, import_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    if !dirs.is_empty() {
        return Ok(dirs);
    }

    let Some(import_dir) = import_dir else {
        bail!("No directories given and no import_dir configured");
    };

    let mut entries = fs::read_dir(import_dir)
        .await
        .with_context(|| format!("Failed to read import directory {}", import_dir.display()))?;

    let mut targets = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            targets.push(entry.path());
        }
    }
    targets.sort();
    Ok(targets)
}
