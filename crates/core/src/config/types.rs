use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
///
/// The document is flat: every key lives at the top level of the TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// MyAnimeList API client ID (sent as `X-MAL-CLIENT-ID`).
    #[serde(default)]
    pub mal_client_id: String,
    /// Root of the organized library.
    #[serde(default)]
    pub library_dir: PathBuf,
    /// Directory holding folders waiting to be imported.
    #[serde(default)]
    pub import_dir: Option<PathBuf>,
    /// Maximum number of catalog candidates to show (default: 5).
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
    /// Override for the MyAnimeList API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mal_base_url: Option<String>,
    /// Catalog request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Archive extensions (with leading dot) that get imported.
    #[serde(default = "default_archive_extensions")]
    pub archive_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mal_client_id: String::new(),
            library_dir: PathBuf::new(),
            import_dir: None,
            search_limit: default_search_limit(),
            mal_base_url: None,
            request_timeout_secs: default_timeout(),
            archive_extensions: default_archive_extensions(),
        }
    }
}

pub(crate) fn default_search_limit() -> u32 {
    5
}

fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_archive_extensions() -> Vec<String> {
    vec![".cbz".to_string(), ".cbr".to_string()]
}

/// Sanitized config for log output (client ID redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub mal_client_id_configured: bool,
    pub library_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_dir: Option<PathBuf>,
    pub search_limit: u32,
    pub mal_base_url: Option<String>,
    pub request_timeout_secs: u64,
    pub archive_extensions: Vec<String>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            mal_client_id_configured: !config.mal_client_id.is_empty(),
            library_dir: config.library_dir.clone(),
            import_dir: config.import_dir.clone(),
            search_limit: config.search_limit,
            mal_base_url: config.mal_base_url.clone(),
            request_timeout_secs: config.request_timeout_secs,
            archive_extensions: config.archive_extensions.clone(),
        }
    }
}
