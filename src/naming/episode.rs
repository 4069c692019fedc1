//! Episode detection for series names like `Show Name S01E02`

use crate::model::EpisodeInfo;
use once_cell::sync::Lazy;
use regex::Regex;

/// Series name, optional whitespace, then `S<digits>E<digits>`
static EPISODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)\s*S(\d+)E(\d+)").expect("episode pattern is valid")
});

/// Detect series/season/episode structure in an item name
///
/// Returns `None` when the name carries no `SxxEyy` marker, when the
/// series prefix is blank, or when a number is zero or does not fit
/// in a `u32`. `None` is the normal outcome for unstructured names.
pub fn resolve_episode(name: &str) -> Option<EpisodeInfo> {
    let caps = EPISODE_PATTERN.captures(name)?;

    let series_name = caps.get(1)?.as_str().trim();
    if series_name.is_empty() {
        return None;
    }

    let season: u32 = caps.get(2)?.as_str().parse().ok()?;
    let episode: u32 = caps.get(3)?.as_str().parse().ok()?;
    if season == 0 || episode == 0 {
        return None;
    }

    Some(EpisodeInfo {
        series_name: series_name.to_string(),
        season,
        episode,
    })
}
