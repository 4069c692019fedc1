//! Sync orchestration and output tree organization

pub mod config;
pub mod organizer;
pub mod pipeline;
pub mod store;

pub use config::SyncConfig;
pub use organizer::StrmOrganizer;
pub use pipeline::{sync_manifest, SyncEngine};
pub use store::{FsPointerStore, PointerStore};
