//! Main sync pipeline orchestration

use super::config::SyncConfig;
use super::organizer::StrmOrganizer;
use super::store::PointerStore;
use crate::classify::Classifier;
use crate::m3u::parse_manifest;
use crate::model::{ClassifiedItem, Ledger, LedgerRecord};
use crate::report::{RunReport, SyncOutcome};
use chrono::Local;

/// Log progress at info level every this many items
const PROGRESS_INTERVAL: usize = 1000;

/// Writes pointer files for classified items, skipping satisfied ones
pub struct SyncEngine<S: PointerStore> {
    organizer: StrmOrganizer,
    store: S,
}

impl<S: PointerStore> SyncEngine<S> {
    /// Create a new sync engine
    pub fn new(organizer: StrmOrganizer, store: S) -> Self {
        Self { organizer, store }
    }

    /// Sync all items against the ledger
    ///
    /// An item is skipped when its fingerprint is in the ledger and the
    /// recorded file still exists; otherwise its pointer file is written
    /// and the ledger updated. Items without a configured base directory
    /// are skipped. A failure on one item is logged and counted; it never
    /// stops the remaining items.
    pub fn sync(&self, items: &[ClassifiedItem], ledger: &mut Ledger) -> SyncOutcome {
        log::info!("Syncing {} items...", items.len());
        let mut outcome = SyncOutcome::default();

        for (i, item) in items.iter().enumerate() {
            if (i + 1) % PROGRESS_INTERVAL == 0 {
                log::info!("[{}/{}] items processed", i + 1, items.len());
            }

            let Some(path) = self.organizer.target_path(item) else {
                log::debug!("No base path for {} item '{}', skipping", item.category, item.name());
                outcome.skipped += 1;
                continue;
            };

            if ledger.is_satisfied(&item.fingerprint, |recorded| self.store.exists(recorded)) {
                log::debug!("Already synced: '{}'", item.name());
                outcome.skipped += 1;
                continue;
            }

            match self.store.write_pointer(&path, &item.entry.url) {
                Ok(()) => {
                    log::debug!("Created: {:?}", path);
                    ledger.upsert(
                        item.fingerprint.clone(),
                        LedgerRecord {
                            name: item.entry.name.clone(),
                            created_at: Local::now().naive_local(),
                            path,
                        },
                    );
                    outcome.created += 1;
                }
                Err(e) => {
                    log::error!("Failed to create pointer for '{}': {:#}", item.name(), e);
                    outcome.errors += 1;
                }
            }
        }

        log::info!(
            "Sync complete: {} created, {} skipped, {} errors",
            outcome.created,
            outcome.skipped,
            outcome.errors
        );
        outcome
    }
}

/// Run one full pass over manifest text: parse, classify, sync
///
/// Updates the ledger and `last_sync` in `config`; persisting the config
/// is left to the caller.
pub fn sync_manifest<S: PointerStore>(text: &str, config: &mut SyncConfig, store: S) -> RunReport {
    let entries = parse_manifest(text);

    let classifier = Classifier::new(&config.rules);
    let (items, summary) = classifier.classify_all(entries);
    summary.log();

    let engine = SyncEngine::new(StrmOrganizer::from_config(config), store);
    let outcome = engine.sync(&items, &mut config.processed_items);

    config.last_sync = Some(Local::now().naive_local());

    RunReport { summary, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ClassifierRules;
    use crate::model::{Category, RawEntry};
    use anyhow::bail;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, HashSet};
    use std::path::{Path, PathBuf};

    /// In-memory store; writes to paths containing "fail" are rejected
    #[derive(Default)]
    struct MemoryStore {
        files: RefCell<HashSet<PathBuf>>,
    }

    impl PointerStore for MemoryStore {
        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains(path)
        }

        fn write_pointer(&self, path: &Path, _url: &str) -> anyhow::Result<()> {
            if path.to_string_lossy().contains("fail") {
                bail!("simulated write failure");
            }
            self.files.borrow_mut().insert(path.to_path_buf());
            Ok(())
        }
    }

    fn organizer() -> StrmOrganizer {
        let bases: BTreeMap<Category, PathBuf> = [
            (Category::Channels, PathBuf::from("/out/channels")),
            (Category::Movies, PathBuf::from("/out/movies")),
        ]
        .into_iter()
        .collect();
        StrmOrganizer::new(bases, &ClassifierRules::default(), "strm")
    }

    fn movie(name: &str) -> ClassifiedItem {
        ClassifiedItem::new(
            RawEntry {
                name: name.to_string(),
                display_name: name.to_string(),
                group: "Filmes | Acao".to_string(),
                url: format!("http://host/{name}"),
                logo: String::new(),
            },
            Category::Movies,
        )
    }

    #[test]
    fn test_second_run_skips_everything() {
        let store = MemoryStore::default();
        let engine = SyncEngine::new(organizer(), &store);
        let items = vec![movie("A"), movie("B")];
        let mut ledger = Ledger::new();

        let first = engine.sync(&items, &mut ledger);
        assert_eq!((first.created, first.skipped, first.errors), (2, 0, 0));
        assert_eq!(ledger.len(), 2);

        let second = engine.sync(&items, &mut ledger);
        assert_eq!((second.created, second.skipped, second.errors), (0, 2, 0));
    }

    #[test]
    fn test_missing_file_is_recreated() {
        let store = MemoryStore::default();
        let engine = SyncEngine::new(organizer(), &store);
        let items = vec![movie("A"), movie("B")];
        let mut ledger = Ledger::new();
        engine.sync(&items, &mut ledger);

        store.files.borrow_mut().remove(Path::new("/out/movies/A.strm"));

        let outcome = engine.sync(&items, &mut ledger);
        assert_eq!((outcome.created, outcome.skipped), (1, 1));
        assert!(store.exists(Path::new("/out/movies/A.strm")));
    }

    #[test]
    fn test_write_failure_does_not_stop_run() {
        let store = MemoryStore::default();
        let engine = SyncEngine::new(organizer(), &store);
        let items = vec![movie("A"), movie("fail me"), movie("C")];
        let mut ledger = Ledger::new();

        let outcome = engine.sync(&items, &mut ledger);
        assert_eq!((outcome.created, outcome.skipped, outcome.errors), (2, 0, 1));
        assert!(!ledger.contains(&items[1].fingerprint));
    }

    #[test]
    fn test_unconfigured_category_is_skipped() {
        let store = MemoryStore::default();
        let engine = SyncEngine::new(organizer(), &store);
        let mut series = movie("Show S01E01");
        series.category = Category::Series;
        let mut ledger = Ledger::new();

        let outcome = engine.sync(&[series], &mut ledger);
        assert_eq!((outcome.created, outcome.skipped), (0, 1));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_duplicate_items_written_once() {
        let store = MemoryStore::default();
        let engine = SyncEngine::new(organizer(), &store);
        let mut ledger = Ledger::new();

        let outcome = engine.sync(&[movie("A"), movie("A")], &mut ledger);
        assert_eq!((outcome.created, outcome.skipped), (1, 1));
    }
}
