//! Filesystem-safe slugs for export filenames.

/// Slug used when the reference derives to nothing.
pub const FALLBACK_SLUG: &str = "deep-dive";

const MAX_SLUG_LEN: usize = 60;

/// Lowercase a free-text reference into `[a-z0-9]` runs joined by single
/// hyphens, trimmed of leading/trailing separators and cut to 60 chars.
/// A reference with no usable characters yields [`FALLBACK_SLUG`].
#[must_use]
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len().min(MAX_SLUG_LEN));
    let mut pending_separator = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }

    out.truncate(MAX_SLUG_LEN);
    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        out
    }
}
