//! Series name cleaning.
//!
//! Import folders are usually named after a release, e.g.
//! `One Piece [Digital] [1r0n]`. The bracketed release annotations confuse
//! catalog search, so they are stripped before the name is used as a query.

use std::path::Path;
use std::sync::OnceLock;

use regex_lite::Regex;

fn bracket_tag() -> &'static Regex {
    static BRACKET_TAG: OnceLock<Regex> = OnceLock::new();
    BRACKET_TAG.get_or_init(|| Regex::new(r"\[[^\[\]]*\]").expect("bracket pattern is valid"))
}

/// Remove every `[...]` annotation from `raw` and trim the result.
///
/// Tags are removed innermost-first until none remain, so nested tags vanish
/// completely. Casing and the spacing between the remaining words are left
/// untouched.
pub fn clean_name(raw: &str) -> String {
    let pattern = bracket_tag();
    let mut cleaned = raw.to_string();

    while pattern.is_match(&cleaned) {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }

    cleaned.trim().to_string()
}

/// Derive the search name for an import directory from its final path component.
pub fn series_name_from_dir(dir: &Path) -> String {
    let basename = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string_lossy().into_owned());

    clean_name(&basename)
}
