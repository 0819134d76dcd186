//! Path-string helpers shared by every ingestion source.
//!
//! Paths reach the core as raw strings (dialog results, startup arguments,
//! dropped file names) and may follow either platform's separator
//! convention, so these work on `&str` rather than `std::path::Path`.

use std::path::PathBuf;

/// Extensions accepted for drag-and-drop and the import picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Extensions treated as Markdown by the startup file association.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Strip one surrounding `"` on each side (platform quoting artifact).
pub fn strip_quotes(raw: &str) -> &str {
    let s = raw.strip_prefix('"').unwrap_or(raw);
    s.strip_suffix('"').unwrap_or(s)
}

/// Quote-stripped path ready for the bridge.
pub fn normalize_path(raw: &str) -> PathBuf {
    PathBuf::from(strip_quotes(raw))
}

/// Final path segment, splitting on both `/` and `\`.
///
/// Trailing separators are ignored; a string with no usable segment
/// (empty, or separators only) yields an empty name.
pub fn display_name(raw: &str) -> String {
    strip_quotes(raw)
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .last()
        .unwrap_or("")
        .to_string()
}

/// A single plain file name: not empty, not `.` or `..`, no separators.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Case-insensitive check of the name's extension against `allowed`.
pub fn has_extension(name: &str, allowed: &[&str]) -> bool {
    let file = display_name(name);
    match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            allowed.iter().any(|a| a.eq_ignore_ascii_case(ext))
        }
        _ => false,
    }
}

/// Drag-and-drop filter: `.md`, `.markdown` or `.txt`.
pub fn is_accepted_file(name: &str) -> bool {
    has_extension(name, ACCEPTED_EXTENSIONS)
}

/// Startup filter: `.md` or `.markdown`.
pub fn is_markdown_file(name: &str) -> bool {
    has_extension(name, MARKDOWN_EXTENSIONS)
}
