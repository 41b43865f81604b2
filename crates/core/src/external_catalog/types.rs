//! Types for catalog search results.

use serde::{Deserialize, Serialize};

/// Media type string the catalog uses for the primary kind.
pub const PRIMARY_MEDIA_TYPE: &str = "manga";

/// Coarse media classification used to filter the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Regular manga.
    Primary,
    /// Light novels, novels, one-shots, doujinshi and the rest.
    Other,
}

/// A series returned by a catalog search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesCandidate {
    /// Catalog ID.
    pub id: u64,
    /// Main title.
    pub title: String,
    /// English alternate title, when the catalog has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_title: Option<String>,
    /// Number of volumes (0 when unknown or ongoing).
    #[serde(default)]
    pub volume_count: u32,
    /// Number of chapters (0 when unknown or ongoing).
    #[serde(default)]
    pub chapter_count: u32,
    /// Raw media type reported by the catalog (`manga`, `light_novel`, ...).
    pub media_type: String,
}

impl SeriesCandidate {
    pub fn media_kind(&self) -> MediaKind {
        if self.media_type == PRIMARY_MEDIA_TYPE {
            MediaKind::Primary
        } else {
            MediaKind::Other
        }
    }
}

/// Attributes that can be requested from a catalog search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateField {
    Rank,
    NumVolumes,
    NumChapters,
    AlternativeTitles,
    MediaType,
}

impl CandidateField {
    /// Everything the importer needs to render and filter candidates.
    pub const DEFAULT_SET: &'static [CandidateField] = &[
        CandidateField::Rank,
        CandidateField::NumVolumes,
        CandidateField::NumChapters,
        CandidateField::AlternativeTitles,
        CandidateField::MediaType,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::NumVolumes => "num_volumes",
            Self::NumChapters => "num_chapters",
            Self::AlternativeTitles => "alternative_titles",
            Self::MediaType => "media_type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(media_type: &str) -> SeriesCandidate {
        SeriesCandidate {
            id: 1,
            title: "Test".to_string(),
            alternate_title: None,
            volume_count: 0,
            chapter_count: 0,
            media_type: media_type.to_string(),
        }
    }

    #[test]
    fn test_media_kind() {
        assert_eq!(candidate("manga").media_kind(), MediaKind::Primary);
        assert_eq!(candidate("light_novel").media_kind(), MediaKind::Other);
        assert_eq!(candidate("one_shot").media_kind(), MediaKind::Other);
    }

    #[test]
    fn test_field_names() {
        let names: Vec<&str> = CandidateField::DEFAULT_SET
            .iter()
            .map(|f| f.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "rank",
                "num_volumes",
                "num_chapters",
                "alternative_titles",
                "media_type"
            ]
        );
    }
}
