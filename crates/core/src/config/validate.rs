use super::{types::Config, ConfigError};

/// Largest page size the MyAnimeList search endpoint accepts.
const MAX_SEARCH_LIMIT: u32 = 100;

/// Validate configuration
/// Currently validates:
/// - A catalog client ID is present
/// - A library directory is set
/// - The search limit is within the catalog's accepted range
/// - Archive extensions carry their leading dot
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.mal_client_id.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "mal_client_id is required for catalog search".to_string(),
        ));
    }

    if config.library_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "library_dir is not set (configure it or pass --library)".to_string(),
        ));
    }

    if config.search_limit == 0 || config.search_limit > MAX_SEARCH_LIMIT {
        return Err(ConfigError::ValidationError(format!(
            "search_limit must be between 1 and {}, got {}",
            MAX_SEARCH_LIMIT, config.search_limit
        )));
    }

    if let Some(ext) = config
        .archive_extensions
        .iter()
        .find(|ext| !ext.starts_with('.') || ext.len() < 2)
    {
        return Err(ConfigError::ValidationError(format!(
            "archive extension '{}' must look like '.cbz'",
            ext
        )));
    }

    Ok(())
}
