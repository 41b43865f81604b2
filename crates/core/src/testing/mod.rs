//! Testing utilities and mock implementations.
//!
//! Mocks for the catalog and the placer let the importer run end to end
//! without network access or real library directories.
//!
//! # Example
//!
//! ```rust,ignore
//! use scarlet_core::testing::{fixtures, MockPlacer, MockSeriesCatalog};
//!
//! let catalog = MockSeriesCatalog::new();
//! catalog.set_results(vec![fixtures::manga("One Piece")]).await;
//!
//! let placer = MockPlacer::new();
//! placer.fail_destination("/library/One Piece/One Piece Vol. 02.cbz").await;
//! ```

mod mock_external_catalog;
mod mock_placer;

pub use mock_external_catalog::{MockSeriesCatalog, RecordedSearch};
pub use mock_placer::{MockPlacer, RecordedPlacement};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::external_catalog::SeriesCandidate;

    /// Create a primary (manga) candidate with reasonable defaults.
    pub fn manga(title: &str) -> SeriesCandidate {
        SeriesCandidate {
            id: (title.len() as u64 * 7919) % 100_000,
            title: title.to_string(),
            alternate_title: None,
            volume_count: 10,
            chapter_count: 90,
            media_type: "manga".to_string(),
        }
    }

    /// Create a light novel candidate (hidden when filtering is on).
    pub fn light_novel(title: &str) -> SeriesCandidate {
        SeriesCandidate {
            media_type: "light_novel".to_string(),
            volume_count: 3,
            chapter_count: 0,
            ..manga(title)
        }
    }

    /// Create a candidate with an English alternate title.
    pub fn manga_with_alternate(title: &str, alternate: &str) -> SeriesCandidate {
        SeriesCandidate {
            alternate_title: Some(alternate.to_string()),
            ..manga(title)
        }
    }
}
