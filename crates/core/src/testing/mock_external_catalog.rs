//! Mock series catalog for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::external_catalog::{
    CandidateField, ExternalCatalogError, SeriesCandidate, SeriesCatalog,
};

/// A recorded catalog search for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSearch {
    pub query: String,
    pub limit: u32,
    pub fields: Vec<CandidateField>,
}

/// Mock implementation of the SeriesCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return a fixed, ranked result list
/// - Track queries for assertions
/// - Simulate failures
///
/// # Example
///
/// ```rust,ignore
/// use scarlet_core::testing::{fixtures, MockSeriesCatalog};
///
/// let catalog = MockSeriesCatalog::new();
/// catalog.set_results(vec![fixtures::manga("One Piece")]).await;
///
/// let results = catalog.search("one piece", 5, CandidateField::DEFAULT_SET).await?;
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockSeriesCatalog {
    /// Results in rank order.
    results: Arc<RwLock<Vec<SeriesCandidate>>>,
    /// Recorded searches.
    searches: Arc<RwLock<Vec<RecordedSearch>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<ExternalCatalogError>>>,
}

impl Default for MockSeriesCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSeriesCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            searches: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the ranked results returned by every search.
    pub async fn set_results(&self, results: Vec<SeriesCandidate>) {
        *self.results.write().await = results;
    }

    /// Get all recorded searches.
    pub async fn recorded_searches(&self) -> Vec<RecordedSearch> {
        self.searches.read().await.clone()
    }

    /// Get the number of searches performed.
    pub async fn search_count(&self) -> usize {
        self.searches.read().await.len()
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: ExternalCatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<ExternalCatalogError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl SeriesCatalog for MockSeriesCatalog {
    async fn search(
        &self,
        query: &str,
        limit: u32,
        fields: &[CandidateField],
    ) -> Result<Vec<SeriesCandidate>, ExternalCatalogError> {
        self.searches.write().await.push(RecordedSearch {
            query: query.to_string(),
            limit,
            fields: fields.to_vec(),
        });

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(self
            .results
            .read()
            .await
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
