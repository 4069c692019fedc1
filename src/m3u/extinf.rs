//! Metadata (`#EXTINF:`) line extraction

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix that marks a metadata line
pub const EXTINF_MARKER: &str = "#EXTINF:";

/// `key="value"` attribute pairs; keys may contain dashes (`tvg-name`)
static ATTRIBUTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z0-9_-]+)="([^"]*)""#).expect("attribute pattern is valid")
});

/// Fields extracted from one metadata line
///
/// Missing attributes are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtinfLine {
    pub tvg_name: String,
    pub tvg_logo: String,
    pub group_title: String,

    /// Text after the last comma, trimmed
    pub display_name: String,
}

impl ExtinfLine {
    /// Extract attributes and display name from a metadata line
    ///
    /// The first occurrence of each attribute wins.
    pub fn parse(line: &str) -> Self {
        let mut parsed = Self::default();

        for caps in ATTRIBUTE_PATTERN.captures_iter(line) {
            let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
                continue;
            };

            let slot = match key.as_str() {
                "tvg-name" => &mut parsed.tvg_name,
                "tvg-logo" => &mut parsed.tvg_logo,
                "group-title" => &mut parsed.group_title,
                _ => continue,
            };

            if slot.is_empty() {
                *slot = value.as_str().to_string();
            }
        }

        if let Some((_, tail)) = line.rsplit_once(',') {
            parsed.display_name = tail.trim().to_string();
        }

        parsed
    }

    /// Preferred item name: `tvg-name`, falling back to the display name
    pub fn name(&self) -> &str {
        if self.tvg_name.is_empty() {
            &self.display_name
        } else {
            &self.tvg_name
        }
    }
}
