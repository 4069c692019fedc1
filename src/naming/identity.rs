//! Item fingerprints used as idempotency keys

/// Length of a fingerprint in hex characters
pub const FINGERPRINT_LEN: usize = 16;

/// Separator between name and URL; a control character that does not
/// occur in manifest names or stream URLs
const SEPARATOR: char = '\u{1f}';

/// Derive the idempotency key of an item from its name and stream URL
///
/// Deterministic: identical `(name, url)` pairs always produce the same
/// 16-character lowercase hex token.
pub fn fingerprint(name: &str, url: &str) -> String {
    let digest = md5::compute(format!("{name}{SEPARATOR}{url}").as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(FINGERPRINT_LEN);
    hex
}
