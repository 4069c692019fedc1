//! File name sanitizing for pointer files and their folders

use unicode_normalization::UnicodeNormalization;

/// Characters that are rejected in a path segment on at least one
/// filesystem the output tree may land on
const ILLEGAL_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum length of a sanitized segment, in characters
pub const MAX_SEGMENT_CHARS: usize = 200;

/// Segment used when nothing printable survives sanitizing
pub const EMPTY_PLACEHOLDER: &str = "unnamed";

/// Turn arbitrary text into a single safe path segment
///
/// Never fails and never returns an empty string. The result contains no
/// separators or reserved characters, no `..` runs, no trailing dot and
/// no leading/trailing or repeated whitespace.
pub fn sanitize_segment(raw: &str) -> String {
    // Canonical decomposition, then drop reserved and non-whitespace control chars
    let filtered = raw
        .nfd()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .filter(|c| !c.is_control() || c.is_whitespace());

    // Collapse runs of dots into one
    let mut collapsed = String::with_capacity(raw.len());
    let mut prev_dot = false;
    for c in filtered {
        if c == '.' && prev_dot {
            continue;
        }
        prev_dot = c == '.';
        collapsed.push(c);
    }

    let without_trailing_dots = collapsed.trim_end_matches('.');
    let spaced = without_trailing_dots
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let truncated: String = spaced.chars().take(MAX_SEGMENT_CHARS).collect();

    // Truncation or whitespace collapsing can expose a new trailing dot/space
    let cleaned = truncated.trim_end_matches(|c: char| c == '.' || c.is_whitespace());

    if cleaned.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        cleaned.to_string()
    }
}
