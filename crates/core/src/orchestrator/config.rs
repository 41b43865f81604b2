//! Importer configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{default_archive_extensions, default_search_limit, Config};

/// Configuration for the importer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImporterConfig {
    /// Root of the organized library.
    pub library_dir: PathBuf,

    /// Hide non-manga catalog results (light novels, one-shots, ...).
    #[serde(default = "default_true")]
    pub filter_non_primary: bool,

    /// Number of catalog candidates requested per directory.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Extensions (with leading dot) of files that get filed.
    /// Matching is exact and case-sensitive.
    #[serde(default = "default_archive_extensions")]
    pub archive_extensions: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl ImporterConfig {
    /// Create a config for `library_dir` with default settings.
    pub fn new(library_dir: impl Into<PathBuf>) -> Self {
        Self {
            library_dir: library_dir.into(),
            filter_non_primary: true,
            search_limit: default_search_limit(),
            archive_extensions: default_archive_extensions(),
        }
    }

    /// Build the importer settings from the loaded application config.
    pub fn from_config(config: &Config, filter_non_primary: bool) -> Self {
        Self {
            library_dir: config.library_dir.clone(),
            filter_non_primary,
            search_limit: config.search_limit,
            archive_extensions: config.archive_extensions.clone(),
        }
    }

    /// Whether a file extension (with leading dot) is on the allow-list.
    pub fn is_archive_extension(&self, extension: &str) -> bool {
        self.archive_extensions.iter().any(|e| e == extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = ImporterConfig::new("/library");
        assert!(config.filter_non_primary);
        assert_eq!(config.search_limit, 5);
        assert_eq!(config.archive_extensions, vec![".cbz", ".cbr"]);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let config = ImporterConfig::new("/library");
        assert!(config.is_archive_extension(".cbz"));
        assert!(config.is_archive_extension(".cbr"));
        assert!(!config.is_archive_extension(".CBZ"));
        assert!(!config.is_archive_extension(".zip"));
        assert!(!config.is_archive_extension("cbz"));
    }

    #[test]
    fn test_from_config() {
        let app = Config {
            library_dir: PathBuf::from("/srv/manga"),
            search_limit: 10,
            archive_extensions: vec![".cbz".to_string()],
            ..Config::default()
        };

        let config = ImporterConfig::from_config(&app, false);
        assert_eq!(config.library_dir, PathBuf::from("/srv/manga"));
        assert!(!config.filter_non_primary);
        assert_eq!(config.search_limit, 10);
        assert!(!config.is_archive_extension(".cbr"));
    }

    #[test]
    fn test_deserialize_minimal() {
        let toml = r#"
            library_dir = "/library"
        "#;
        let config: ImporterConfig = toml::from_str(toml).unwrap();
        assert!(config.filter_non_primary);
        assert_eq!(config.search_limit, 5);
    }
}
