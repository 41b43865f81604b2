//! Canonical library file names.

use crate::extractor::ParsedFileInfo;

/// Build `<title>[ Vol. NN][ Ch. NN]<extension>`.
///
/// Segment order is fixed and numbers are zero-padded to two digits. A zero
/// volume or chapter is treated as absent. `extension` carries its leading
/// dot (`.cbz`).
pub fn normalized_filename(title: &str, info: &ParsedFileInfo, extension: &str) -> String {
    let mut pieces = vec![title.to_string()];
    if info.volume != 0 {
        pieces.push(format!("Vol. {:02}", info.volume));
    }
    if info.chapter != 0 {
        pieces.push(format!("Ch. {:02}", info.chapter));
    }
    pieces.join(" ") + extension
}

/// Make a catalog title safe to use as a single directory name.
///
/// Path separators become `-`. A title that would name the library itself
/// or its parent (`.` or `..`) comes back empty and must be rejected.
pub fn sanitize_title(title: &str) -> String {
    let title = title.replace(['/', '\\'], "-");
    match title.trim() {
        "." | ".." => String::new(),
        trimmed => trimmed.to_string(),
    }
}
