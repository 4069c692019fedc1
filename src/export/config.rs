//! Persisted sync configuration and idempotency ledger

use crate::classify::ClassifierRules;
use crate::model::{Category, Ledger};
use crate::source::ManifestSource;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default config location, before `~` expansion
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/strm-sync/config.json";

/// Default pointer file extension (read by Emby/Jellyfin/Kodi)
pub const DEFAULT_EXTENSION: &str = "strm";

/// Configuration for the sync process, stored as JSON between runs
///
/// Every field falls back to its default when absent, so files written
/// by older versions keep their values and gain new fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Remote manifest locator
    pub m3u_url: Option<String>,

    /// Local manifest path; takes precedence over `m3u_url`
    pub m3u_file: Option<String>,

    /// Destination base directory per category (may start with `~`)
    #[serde(deserialize_with = "known_category_paths")]
    pub paths: BTreeMap<Category, String>,

    /// Pointer file extension, without the dot
    pub extension: String,

    /// Classification rules
    pub rules: ClassifierRules,

    /// End of the last completed sync
    pub last_sync: Option<NaiveDateTime>,

    /// Fingerprint -> written pointer file
    pub processed_items: Ledger,
}

impl Default for SyncConfig {
    fn default() -> Self {
        let paths = [
            (Category::Channels, "~/Emby/channels"),
            (Category::Movies, "~/Emby/movies"),
            (Category::Series, "~/Emby/series"),
        ]
        .into_iter()
        .map(|(category, path)| (category, path.to_string()))
        .collect();

        Self {
            m3u_url: None,
            m3u_file: None,
            paths,
            extension: DEFAULT_EXTENSION.to_string(),
            rules: ClassifierRules::default(),
            last_sync: None,
            processed_items: Ledger::new(),
        }
    }
}

impl SyncConfig {
    /// Load the config
    ///
    /// A missing file yields defaults. Absent fields take their defaults,
    /// unknown category keys in `paths` and malformed ledger records are
    /// dropped with a warning. Anything else that does not parse is an
    /// error, so a damaged file never silently turns into a fresh config.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read config: {:?}", path));
            }
        };

        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Config {:?} is not valid; fix or remove it", path))?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save the config, replacing the previous file atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("Failed to write {:?}", tmp))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("Failed to move {:?} into place at {:?}", tmp, path))?;

        log::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Configured manifest source, if any (file first, then URL)
    pub fn source(&self) -> Option<ManifestSource> {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        if let Some(file) = non_empty(&self.m3u_file) {
            return Some(ManifestSource::File(PathBuf::from(
                shellexpand::tilde(&file).as_ref(),
            )));
        }
        non_empty(&self.m3u_url).map(ManifestSource::Url)
    }

    /// Replace the manifest source
    pub fn set_source(&mut self, source: &ManifestSource) {
        match source {
            ManifestSource::File(path) => {
                self.m3u_file = Some(path.to_string_lossy().into_owned());
                self.m3u_url = None;
            }
            ManifestSource::Url(url) => {
                self.m3u_url = Some(url.clone());
                self.m3u_file = None;
            }
        }
    }

    /// Base directories with `~` expanded
    pub fn base_paths(&self) -> BTreeMap<Category, PathBuf> {
        self.paths
            .iter()
            .map(|(category, path)| (*category, PathBuf::from(shellexpand::tilde(path).as_ref())))
            .collect()
    }
}

/// Read `paths`, keeping only keys that name a category
fn known_category_paths<'de, D>(deserializer: D) -> Result<BTreeMap<Category, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut paths = BTreeMap::new();

    for (key, path) in raw {
        match serde_json::from_value::<Category>(serde_json::Value::String(key.clone())) {
            Ok(category) => {
                paths.insert(category, path);
            }
            Err(_) => log::warn!("Ignoring path for unknown category '{}'", key),
        }
    }

    Ok(paths)
}
