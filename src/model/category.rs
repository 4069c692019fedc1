use serde::{Deserialize, Serialize};
use std::fmt;

/// Destination category of a manifest entry
///
/// The category decides the shape of the output path (flat file,
/// group folder, or series/season hierarchy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Live channels, organized in one folder per group
    #[serde(alias = "canais")]
    Channels,

    /// Movies and other VOD, written flat into the base folder
    #[serde(alias = "filmes")]
    Movies,

    /// Series episodes, organized by series and season when detectable
    Series,
}

impl Category {
    /// All categories, in default declaration order
    pub const ALL: [Category; 3] = [Category::Channels, Category::Movies, Category::Series];

    /// Stable lowercase key used in config files and logs
    pub fn key(&self) -> &'static str {
        match self {
            Category::Channels => "channels",
            Category::Movies => "movies",
            Category::Series => "series",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
