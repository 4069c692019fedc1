//! strm-sync - M3U manifest to pointer file tree synchronizer
//!
//! This library turns an M3U playlist into a directory tree of `.strm`
//! pointer files for media-library indexers such as Emby or Jellyfin.
//! Runs are incremental: a ledger of fingerprints keeps existing files
//! untouched and recreates only what is missing.

pub mod classify;
pub mod export;
pub mod m3u;
pub mod model;
pub mod naming;
pub mod report;
pub mod source;

pub use export::config::SyncConfig;
pub use export::pipeline::{sync_manifest, SyncEngine};
pub use report::{ManifestSummary, RunReport, SyncOutcome};
pub use source::{ManifestSource, SourceError};
