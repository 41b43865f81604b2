//! Chapter and volume extraction from archive file names.
//!
//! Archive naming conventions vary between release groups: some mark the
//! chapter with a `c` prefix (`Series c012.cbz`), others the volume with a
//! `v` prefix (`Series v05.cbz`). The extractor holds an ordered list of
//! patterns and the first one that binds cleanly wins.
//!
//! Patterns are plain regexes whose named capture groups are bound by name:
//!
//! | group     | field                          |
//! |-----------|--------------------------------|
//! | `series`  | [`ParsedFileInfo::series_label`] |
//! | `chapter` | [`ParsedFileInfo::chapter`]    |
//! | `volume`  | [`ParsedFileInfo::volume`]     |
//!
//! Any other group name makes the pattern fail with
//! [`PatternError::UnknownField`].

use regex_lite::Regex;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Numbering recovered from a file name. A value of 0 means "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFileInfo {
    /// Text preceding the number. Only used for diagnostics.
    pub series_label: String,
    pub chapter: u32,
    pub volume: u32,
}

impl ParsedFileInfo {
    /// Whether a chapter or volume number was recovered.
    pub fn has_numbering(&self) -> bool {
        self.chapter != 0 || self.volume != 0
    }
}

/// Reasons a single pattern fails to bind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern could not be compiled.
    #[error("invalid pattern '{name}': {message}")]
    InvalidRegex { name: String, message: String },

    /// The regex did not match the file name.
    #[error("no match")]
    NoMatch,

    /// A capture group has no corresponding field.
    #[error("unknown capture group '{0}'")]
    UnknownField(String),

    /// A numeric capture did not fit a non-negative 32-bit integer.
    #[error("invalid {field} number '{value}'")]
    InvalidNumber { field: String, value: String },
}

/// A named regex whose capture groups bind onto [`ParsedFileInfo`].
#[derive(Debug, Clone)]
pub struct ExtractionPattern {
    name: String,
    regex: Regex,
}

impl ExtractionPattern {
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, PatternError> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|e| PatternError::InvalidRegex {
            name: name.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { name, regex })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Match `filename` and bind every participating capture group.
    ///
    /// Binding happens on a fresh value, so a failure never leaks partial
    /// results into the caller.
    pub fn bind(&self, filename: &str) -> Result<ParsedFileInfo, PatternError> {
        let caps = self
            .regex
            .captures(filename)
            .ok_or(PatternError::NoMatch)?;

        let mut info = ParsedFileInfo::default();
        for group in self.regex.capture_names().flatten() {
            let Some(m) = caps.name(group) else {
                continue;
            };
            match group {
                "series" => info.series_label = m.as_str().to_string(),
                "chapter" => info.chapter = parse_number(group, m.as_str())?,
                "volume" => info.volume = parse_number(group, m.as_str())?,
                other => return Err(PatternError::UnknownField(other.to_string())),
            }
        }

        Ok(info)
    }
}

fn parse_number(field: &str, value: &str) -> Result<u32, PatternError> {
    value
        .parse::<u32>()
        .map_err(|_| PatternError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// The default cascade: chapter marker first, then volume marker.
pub fn builtin_patterns() -> Vec<ExtractionPattern> {
    [
        ("chapter", r"(?P<series>.*)c(?P<chapter>\d+\b)"),
        ("volume", r"(?P<series>.*)v(?P<volume>\d+\b)"),
    ]
    .into_iter()
    .filter_map(|(name, pattern)| ExtractionPattern::new(name, pattern).ok())
    .collect()
}

/// Ordered cascade of extraction patterns.
#[derive(Debug, Clone)]
pub struct ChapterVolumeExtractor {
    patterns: Vec<ExtractionPattern>,
}

impl Default for ChapterVolumeExtractor {
    fn default() -> Self {
        Self::new(builtin_patterns())
    }
}

impl ChapterVolumeExtractor {
    pub fn new(patterns: Vec<ExtractionPattern>) -> Self {
        Self { patterns }
    }

    /// Run the cascade over `filename`.
    ///
    /// Returns the bound value of the first pattern that succeeds and `true`,
    /// or a zero value and `false` when every pattern failed. Failures are
    /// never fatal: an unknown capture group and an unparsable number both
    /// fall through to the next pattern, they only differ in log level.
    pub fn extract(&self, filename: &str) -> (ParsedFileInfo, bool) {
        for pattern in &self.patterns {
            match pattern.bind(filename) {
                Ok(info) => {
                    trace!(
                        pattern = pattern.name(),
                        chapter = info.chapter,
                        volume = info.volume,
                        "Extracted numbering from {}",
                        filename
                    );
                    return (info, true);
                }
                Err(PatternError::NoMatch) => {
                    trace!(pattern = pattern.name(), "No match for {}", filename);
                }
                Err(e @ PatternError::UnknownField(_)) => {
                    debug!(pattern = pattern.name(), "Skipping pattern for {}: {}", filename, e);
                }
                Err(e) => {
                    warn!(pattern = pattern.name(), "Failed to parse {}: {}", filename, e);
                }
            }
        }

        (ParsedFileInfo::default(), false)
    }
}
