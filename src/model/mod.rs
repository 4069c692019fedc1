//! Unified data model for manifest entries and sync state
//!
//! This module defines data structures that are independent of
//! both the input manifest format and the on-disk output layout.

mod category;
mod entry;
mod ledger;

pub use category::Category;
pub use entry::{ClassifiedItem, EpisodeInfo, RawEntry};
pub use ledger::{Ledger, LedgerRecord};
