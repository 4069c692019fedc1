use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Record of a pointer file written for one fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Item name at the time of writing
    pub name: String,

    /// Local time the pointer file was written
    pub created_at: NaiveDateTime,

    /// Where the pointer file was written
    pub path: PathBuf,
}

/// Persistent map of fingerprint to last written record
///
/// Serialized as a plain JSON object keyed by fingerprint. Records that
/// fail to parse are dropped on load; their items are simply written
/// again on the next sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    records: BTreeMap<String, LedgerRecord>,
}

impl Ledger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for a fingerprint
    pub fn get(&self, fingerprint: &str) -> Option<&LedgerRecord> {
        self.records.get(fingerprint)
    }

    pub fn contains(&self, fingerprint: &str) -> bool {
        self.records.contains_key(fingerprint)
    }

    /// Insert or replace the record for a fingerprint
    pub fn upsert(&mut self, fingerprint: String, record: LedgerRecord) {
        self.records.insert(fingerprint, record);
    }

    /// Whether the fingerprint is recorded *and* its recorded file still exists
    ///
    /// `exists` checks the filesystem; a record whose file is gone is not
    /// satisfied, so the item gets written again.
    pub fn is_satisfied<F>(&self, fingerprint: &str, exists: F) -> bool
    where
        F: Fn(&Path) -> bool,
    {
        self.records
            .get(fingerprint)
            .is_some_and(|record| exists(&record.path))
    }

    /// Number of recorded fingerprints
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

}

impl<'de> Deserialize<'de> for Ledger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut records = BTreeMap::new();

        for (fingerprint, value) in raw {
            match serde_json::from_value::<LedgerRecord>(value) {
                Ok(record) => {
                    records.insert(fingerprint, record);
                }
                Err(e) => log::warn!("Dropping unreadable ledger record {}: {}", fingerprint, e),
            }
        }

        Ok(Self { records })
    }
}
