//! Naming helpers: path-segment sanitizing, item fingerprints and
//! episode detection

mod episode;
mod identity;
mod sanitize;

pub use episode::resolve_episode;
pub use identity::{fingerprint, FINGERPRINT_LEN};
pub use sanitize::{sanitize_segment, EMPTY_PLACEHOLDER, MAX_SEGMENT_CHARS};
