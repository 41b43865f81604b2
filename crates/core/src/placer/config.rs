//! Configuration for the placer module.

use serde::{Deserialize, Serialize};

/// Configuration for the file system placer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// Report placements without touching the file system.
    #[serde(default)]
    pub dry_run: bool,
}

impl PlacerConfig {
    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }
}
