//! Output tree layout for pointer files

use super::config::SyncConfig;
use crate::classify::ClassifierRules;
use crate::model::{Category, ClassifiedItem};
use crate::naming::{resolve_episode, sanitize_segment};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Derives where each item's pointer file lives
///
/// Layout per category:
/// - series with `SxxEyy`: `<base>/<series>/Season NN/<display name>.<ext>`
/// - other series: `<base>/<group>/<name>.<ext>`
/// - channels: `<base>/<group>/<name>.<ext>`
/// - movies: `<base>/<name>.<ext>`
///
/// `<group>` is the group label with the category's folder prefix removed.
#[derive(Debug, Clone)]
pub struct StrmOrganizer {
    /// Base directory per category
    bases: BTreeMap<Category, PathBuf>,

    /// Group label prefix stripped for folder names, per category
    folder_prefixes: BTreeMap<Category, String>,

    /// Pointer file extension, without the dot
    extension: String,
}

impl StrmOrganizer {
    /// Create an organizer for the given base directories
    pub fn new(bases: BTreeMap<Category, PathBuf>, rules: &ClassifierRules, extension: &str) -> Self {
        let folder_prefixes = rules
            .categories
            .iter()
            .filter_map(|rule| {
                rule.folder_prefix
                    .as_ref()
                    .map(|prefix| (rule.category, prefix.clone()))
            })
            .collect();

        Self {
            bases,
            folder_prefixes,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Create an organizer from the persisted config
    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.base_paths(), &config.rules, &config.extension)
    }

    /// Base directory for a category, if configured
    pub fn base_path(&self, category: Category) -> Option<&PathBuf> {
        self.bases.get(&category)
    }

    /// Full target path of an item's pointer file
    ///
    /// Returns `None` when the item's category has no base directory.
    pub fn target_path(&self, item: &ClassifiedItem) -> Option<PathBuf> {
        let base = self.base_path(item.category)?;
        let entry = &item.entry;

        let path = match item.category {
            Category::Series => match resolve_episode(&entry.name) {
                Some(episode) => {
                    // Episode files are named after the display label
                    let label = if entry.display_name.is_empty() {
                        &entry.name
                    } else {
                        &entry.display_name
                    };
                    base.join(sanitize_segment(&episode.series_name))
                        .join(format!("Season {:02}", episode.season))
                        .join(self.file_name(label))
                }
                None => base
                    .join(self.group_folder(item.category, &entry.group))
                    .join(self.file_name(&entry.name)),
            },
            Category::Channels => base
                .join(self.group_folder(item.category, &entry.group))
                .join(self.file_name(&entry.name)),
            Category::Movies => base.join(self.file_name(&entry.name)),
        };

        Some(path)
    }

    /// Folder name for a group label
    fn group_folder(&self, category: Category, group: &str) -> String {
        let stripped = self
            .folder_prefixes
            .get(&category)
            .and_then(|prefix| group.strip_prefix(prefix.as_str()))
            .unwrap_or(group);
        sanitize_segment(stripped)
    }

    fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", sanitize_segment(stem), self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawEntry;
    use std::path::Path;

    fn organizer() -> StrmOrganizer {
        let bases = [
            (Category::Channels, PathBuf::from("/media/Channels")),
            (Category::Movies, PathBuf::from("/media/Movies")),
            (Category::Series, PathBuf::from("/media/Series")),
        ]
        .into_iter()
        .collect();
        StrmOrganizer::new(bases, &ClassifierRules::default(), "strm")
    }

    fn item(name: &str, display: &str, group: &str, category: Category) -> ClassifiedItem {
        ClassifiedItem::new(
            RawEntry {
                name: name.to_string(),
                display_name: display.to_string(),
                group: group.to_string(),
                url: "http://x/y".to_string(),
                logo: String::new(),
            },
            category,
        )
    }

    #[test]
    fn test_series_episode_path() {
        let item = item("Show Name S01E02", "Show Name S01E02", "Series | Drama", Category::Series);
        assert_eq!(
            organizer().target_path(&item).unwrap(),
            Path::new("/media/Series/Show Name/Season 01/Show Name S01E02.strm")
        );
    }

    #[test]
    fn test_series_episode_uses_display_name() {
        let item = item("Dark S03E10", "Dark - Ep 10: Paradise", "Series | Sci-Fi", Category::Series);
        assert_eq!(
            organizer().target_path(&item).unwrap(),
            Path::new("/media/Series/Dark/Season 03/Dark - Ep 10 Paradise.strm")
        );
    }

    #[test]
    fn test_series_without_episode_uses_group_folder() {
        let item = item("Making Of", "Making Of", "Series | Documentarios", Category::Series);
        assert_eq!(
            organizer().target_path(&item).unwrap(),
            Path::new("/media/Series/Documentarios/Making Of.strm")
        );
    }

    #[test]
    fn test_channel_path_strips_prefix() {
        let espn = item("ESPN HD", "ESPN HD", "Canais | Esportes", Category::Channels);
        assert_eq!(
            organizer().target_path(&espn).unwrap(),
            Path::new("/media/Channels/Esportes/ESPN HD.strm")
        );

        // Prefix only removed from the start of the label
        let local = item("Local", "Local", "Regional Canais | Sul", Category::Channels);
        assert_eq!(
            organizer().target_path(&local).unwrap(),
            Path::new("/media/Channels/Regional Canais Sul/Local.strm")
        );
    }

    #[test]
    fn test_movie_path_is_flat() {
        let item = item("Movie: The Sequel?", "Movie", "Filmes | Acao", Category::Movies);
        assert_eq!(
            organizer().target_path(&item).unwrap(),
            Path::new("/media/Movies/Movie The Sequel.strm")
        );
    }

    #[test]
    fn test_missing_base_path() {
        let bases = [(Category::Movies, PathBuf::from("/media/Movies"))]
            .into_iter()
            .collect();
        let organizer = StrmOrganizer::new(bases, &ClassifierRules::default(), ".ptr");

        let channel = item("ESPN", "ESPN", "Canais | Esportes", Category::Channels);
        assert!(organizer.target_path(&channel).is_none());

        let movie = item("Movie", "Movie", "Filmes | Acao", Category::Movies);
        assert_eq!(
            organizer.target_path(&movie).unwrap(),
            Path::new("/media/Movies/Movie.ptr")
        );
    }
}
