//! MyAnimeList API client.
//!
//! Public read endpoints only need a client ID, passed in the
//! `X-MAL-CLIENT-ID` header. Client IDs are issued at
//! <https://myanimelist.net/apiconfig>.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{CandidateField, SeriesCandidate};
use super::{ExternalCatalogError, SeriesCatalog};

const CLIENT_ID_HEADER: &str = "X-MAL-CLIENT-ID";

/// MyAnimeList client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MalConfig {
    /// MyAnimeList client ID (required).
    pub client_id: String,
    /// Base URL (default: https://api.myanimelist.net/v2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

/// MyAnimeList API client.
pub struct MalClient {
    client: Client,
    base_url: String,
}

impl MalClient {
    /// Create a new MyAnimeList client.
    pub fn new(config: MalConfig) -> Result<Self, ExternalCatalogError> {
        if config.client_id.trim().is_empty() {
            return Err(ExternalCatalogError::NotConfigured(
                "MyAnimeList client ID is required".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        let client_id = HeaderValue::from_str(config.client_id.trim()).map_err(|_| {
            ExternalCatalogError::NotConfigured(
                "MyAnimeList client ID contains invalid characters".to_string(),
            )
        })?;
        headers.insert(CLIENT_ID_HEADER, client_id);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| "https://api.myanimelist.net/v2".to_string());

        Ok(Self { client, base_url })
    }

    /// Search the manga index.
    pub async fn search_manga(
        &self,
        query: &str,
        limit: u32,
        fields: &[CandidateField],
    ) -> Result<Vec<SeriesCandidate>, ExternalCatalogError> {
        let url = format!("{}/manga", self.base_url);
        let fields = fields
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");

        debug!("MAL manga search: query='{}', limit={}", query, limit);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.to_string()),
                ("limit", limit.to_string()),
                ("fields", fields),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == 401 || status == 403 {
            return Err(ExternalCatalogError::NotConfigured(
                "Invalid MyAnimeList client ID".to_string(),
            ));
        }
        if status == 429 {
            return Err(ExternalCatalogError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExternalCatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_result: MalSearchResponse = response.json().await.map_err(|e| {
            ExternalCatalogError::ParseError(format!(
                "Failed to parse manga search response: {}",
                e
            ))
        })?;

        Ok(search_result.into_candidates(limit))
    }
}

#[async_trait]
impl SeriesCatalog for MalClient {
    async fn search(
        &self,
        query: &str,
        limit: u32,
        fields: &[CandidateField],
    ) -> Result<Vec<SeriesCandidate>, ExternalCatalogError> {
        self.search_manga(query, limit, fields).await
    }
}

// ============================================================================
// MyAnimeList API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct MalSearchResponse {
    #[serde(default)]
    data: Vec<MalSearchEntry>,
}

impl MalSearchResponse {
    fn into_candidates(self, limit: u32) -> Vec<SeriesCandidate> {
        self.data
            .into_iter()
            .take(limit as usize)
            .map(|entry| entry.node.into())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct MalSearchEntry {
    node: MalManga,
}

#[derive(Debug, Deserialize)]
struct MalManga {
    id: u64,
    title: String,
    #[serde(default)]
    alternative_titles: Option<MalAlternativeTitles>,
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    num_volumes: Option<u32>,
    #[serde(default)]
    num_chapters: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MalAlternativeTitles {
    #[serde(default)]
    en: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<MalManga> for SeriesCandidate {
    fn from(m: MalManga) -> Self {
        Self {
            id: m.id,
            title: m.title,
            alternate_title: m
                .alternative_titles
                .and_then(|t| t.en)
                .filter(|en| !en.trim().is_empty()),
            volume_count: m.num_volumes.unwrap_or(0),
            chapter_count: m.num_chapters.unwrap_or(0),
            media_type: m.media_type.unwrap_or_default(),
        }
    }
}
