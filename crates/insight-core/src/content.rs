//! Content body transforms.
//!
//! Excerpts are produced by stripping markdown syntax, not by rendering it:
//! heading lines, emphasis and inline-code markers are removed, link syntax
//! collapses to its visible text, and newline runs become single spaces.

use std::sync::LazyLock;

use regex::Regex;

/// Character cap for excerpts, before the ellipsis marker.
const EXCERPT_MAX_CHARS: usize = 150;

static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+ .+$").expect("valid regex"));
static RE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));
static RE_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid regex"));
static RE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").expect("valid regex"));
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]\(.+?\)").expect("valid regex"));
static RE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));
static RE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("valid regex"));

/// The first image reference in a body, split by how its target must be
/// handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Target carries a URI scheme; used verbatim.
    Absolute(String),
    /// Target is a path relative to the post folder; the caller resolves it.
    Relative(String),
}

/// Derive a plain-text excerpt from a markdown body.
///
/// The result is at most [`EXCERPT_MAX_CHARS`] characters plus a `...`
/// marker when truncated. Counting is per character, not per byte, so
/// multi-byte text truncates cleanly.
pub fn excerpt(body: &str) -> String {
    let text = RE_HEADING.replace_all(body, "");
    let text = RE_BOLD.replace_all(&text, "$1");
    let text = RE_ITALIC.replace_all(&text, "$1");
    let text = RE_CODE.replace_all(&text, "$1");
    let text = RE_LINK.replace_all(&text, "$1");
    let text = RE_NEWLINES.replace_all(&text, " ");

    truncate_chars(text.trim())
}

/// Find the first image reference in a markdown body.
///
/// Only the first match counts. Empty targets are ignored.
pub fn first_image(body: &str) -> Option<ImageRef> {
    let captures = RE_IMAGE.captures(body)?;
    let target = captures.get(1)?.as_str().trim();

    if target.is_empty() {
        return None;
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        Some(ImageRef::Absolute(target.to_string()))
    } else {
        Some(ImageRef::Relative(target.to_string()))
    }
}

fn truncate_chars(text: &str) -> String {
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        return text.to_string();
    }

    let end = text
        .char_indices()
        .nth(EXCERPT_MAX_CHARS)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    format!("{}...", &text[..end])
}
