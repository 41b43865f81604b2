//! External catalog integration.
//!
//! The importer only needs one operation from a catalog: a ranked text
//! search. [`MalClient`] implements it against the MyAnimeList v2 API.

mod mal;
mod types;

pub use mal::{MalClient, MalConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when interacting with external catalogs.
#[derive(Debug, Error)]
pub enum ExternalCatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing client ID, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// A searchable series catalog.
///
/// Results come back in the catalog's relevance order, capped at `limit`.
/// Callers must not re-sort them.
#[async_trait]
pub trait SeriesCatalog: Send + Sync {
    /// Search for series matching `query`.
    async fn search(
        &self,
        query: &str,
        limit: u32,
        fields: &[CandidateField],
    ) -> Result<Vec<SeriesCandidate>, ExternalCatalogError>;
}
