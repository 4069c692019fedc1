//! M3U manifest parsing
//!
//! Turns the free-form playlist text into `RawEntry` records. Parsing is
//! tolerant: malformed or orphaned lines are skipped, never fatal.

mod extinf;
mod parser;

pub use extinf::{ExtinfLine, EXTINF_MARKER};
pub use parser::parse_manifest;
