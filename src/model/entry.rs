use super::Category;
use crate::naming::fingerprint;
use serde::{Deserialize, Serialize};

/// One manifest record, as parsed from a metadata line and its URL line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Preferred identity: `tvg-name`, or the display name when that is empty
    pub name: String,

    /// Label after the last comma of the metadata line
    pub display_name: String,

    /// Raw `group-title` label (may be empty)
    pub group: String,

    /// Stream locator, never empty
    pub url: String,

    /// Artwork URL from `tvg-logo` (empty when absent)
    pub logo: String,
}

/// A manifest entry that was assigned a destination category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    pub entry: RawEntry,
    pub category: Category,

    /// Idempotency key derived from name and URL
    pub fingerprint: String,
}

impl ClassifiedItem {
    /// Attach a category to an entry and compute its fingerprint
    pub fn new(entry: RawEntry, category: Category) -> Self {
        let fingerprint = fingerprint(&entry.name, &entry.url);
        Self {
            entry,
            category,
            fingerprint,
        }
    }

    pub fn name(&self) -> &str {
        &self.entry.name
    }

    pub fn group(&self) -> &str {
        &self.entry.group
    }
}

/// Series/season/episode structure detected in an item name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeInfo {
    pub series_name: String,

    /// Season number, always >= 1
    pub season: u32,

    /// Episode number, always >= 1
    pub episode: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, url: &str) -> RawEntry {
        RawEntry {
            name: name.to_string(),
            display_name: name.to_string(),
            group: "Filmes | Acao".to_string(),
            url: url.to_string(),
            logo: String::new(),
        }
    }

    #[test]
    fn test_classified_item_fingerprint() {
        let a = ClassifiedItem::new(entry("Movie", "http://a/1"), Category::Movies);
        let b = ClassifiedItem::new(entry("Movie", "http://a/1"), Category::Movies);
        let c = ClassifiedItem::new(entry("Movie", "http://a/2"), Category::Movies);

        assert_eq!(a.fingerprint, b.fingerprint);
        assert_ne!(a.fingerprint, c.fingerprint);
        assert_eq!(a.name(), "Movie");
        assert_eq!(a.group(), "Filmes | Acao");
    }
}
