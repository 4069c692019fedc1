//! Line scanner pairing metadata lines with their stream URLs

use super::extinf::{ExtinfLine, EXTINF_MARKER};
use crate::model::RawEntry;

/// Directive carrying a group name for the next entry
const EXTGRP_MARKER: &str = "#EXTGRP:";

/// Parse manifest text into raw entries, in manifest order
///
/// A metadata line is paired with the first following line that is
/// neither blank nor a `#` directive. When another metadata line or the
/// end of input comes first, the orphaned metadata line is dropped and
/// scanning resumes *at* that next metadata line.
pub fn parse_manifest(text: &str) -> Vec<RawEntry> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let mut entries = Vec::new();
    let mut orphans = 0usize;
    let mut i = 0;

    while i < lines.len() {
        if !lines[i].starts_with(EXTINF_MARKER) {
            i += 1;
            continue;
        }

        let meta = ExtinfLine::parse(lines[i]);
        let mut extgrp: Option<&str> = None;
        let mut j = i + 1;

        let url = loop {
            match lines.get(j) {
                None => break None,
                Some(line) if line.is_empty() => j += 1,
                Some(line) if line.starts_with(EXTINF_MARKER) => break None,
                Some(line) if line.starts_with('#') => {
                    if let (None, Some(group)) = (extgrp, line.strip_prefix(EXTGRP_MARKER)) {
                        extgrp = Some(group.trim());
                    }
                    j += 1;
                }
                Some(line) => break Some(*line),
            }
        };

        match url {
            Some(url) => {
                let group = if meta.group_title.is_empty() {
                    extgrp.unwrap_or_default().to_string()
                } else {
                    meta.group_title.clone()
                };

                entries.push(RawEntry {
                    name: meta.name().to_string(),
                    display_name: meta.display_name.clone(),
                    group,
                    url: url.to_string(),
                    logo: meta.tvg_logo.clone(),
                });
                i = j + 1;
            }
            None => {
                log::debug!("Metadata line {} has no URL, skipping: {}", i + 1, lines[i]);
                orphans += 1;
                // j is the next metadata line (or end of input), not yet consumed
                i = j;
            }
        }
    }

    log::info!(
        "Parsed {} entries from {} lines ({} without URL)",
        entries.len(),
        lines.len(),
        orphans
    );
    entries
}
