//! URL extraction from free text.
//!
//! Shared social-media posts arrive as a blob of text with a link buried in
//! the middle; this module finds that link.

use std::sync::LazyLock;

use regex::Regex;

/// First maximal run of non-whitespace characters starting with `http://` or
/// `https://`.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

/// Scans `text` for the first well-formed HTTP(S) URL substring.
///
/// Returns only the first match; any additional URLs in the text are ignored
/// by design (one link per submission). Trailing punctuation adjacent to the
/// URL is included in the match, with no trimming, for compatibility with
/// the upstream behavior.
///
/// Returns `None` when the text contains no URL-shaped substring. Callers
/// must treat that as a user-input error, not a system fault.
pub fn extract_first_url(text: &str) -> Option<&str> {
    URL_PATTERN.find(text).map(|m| m.as_str())
}
