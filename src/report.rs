//! Typed run results for the reporting layer

use crate::model::Category;
use std::collections::BTreeMap;

/// Counts gathered while classifying a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSummary {
    /// Entries produced by the parser
    pub parsed: usize,

    /// Accepted entries per category
    pub by_category: BTreeMap<Category, usize>,

    /// Accepted entries per raw group label
    pub by_group: BTreeMap<String, usize>,

    /// Entries rejected by an exclusion term
    pub excluded: usize,

    /// Entries whose group matched no category
    pub unmatched: usize,
}

impl ManifestSummary {
    pub fn record_accepted(&mut self, category: Category, group: &str) {
        *self.by_category.entry(category).or_default() += 1;
        *self.by_group.entry(group.to_string()).or_default() += 1;
    }

    /// Total accepted entries
    pub fn accepted(&self) -> usize {
        self.by_category.values().sum()
    }

    /// Number of distinct group labels among accepted entries
    pub fn group_count(&self) -> usize {
        self.by_group.len()
    }

    /// Categories sorted by descending count, ties by category order
    pub fn categories_by_count(&self) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> =
            self.by_category.iter().map(|(c, n)| (*c, *n)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
    }

    /// Write the summary to the log
    pub fn log(&self) {
        log::info!(
            "Manifest summary: {} parsed, {} accepted, {} excluded, {} unmatched",
            self.parsed,
            self.accepted(),
            self.excluded,
            self.unmatched
        );
        for (category, count) in self.categories_by_count() {
            log::info!("  {}: {}", category, count);
        }
        log::info!("  groups: {}", self.group_count());
    }
}

/// Aggregate result of one sync pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub created: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl SyncOutcome {
    /// Items considered in the pass
    pub fn total(&self) -> usize {
        self.created + self.skipped + self.errors
    }
}

/// Everything a front end needs to report a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub summary: ManifestSummary,
    pub outcome: SyncOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = ManifestSummary::default();
        summary.record_accepted(Category::Series, "Series | Drama");
        summary.record_accepted(Category::Series, "Series | Drama");
        summary.record_accepted(Category::Movies, "Filmes | Acao");
        summary.record_accepted(Category::Channels, "Canais | News");
        summary.record_accepted(Category::Channels, "Canais | Sport");

        assert_eq!(summary.accepted(), 5);
        assert_eq!(summary.group_count(), 4);
        assert_eq!(
            summary.categories_by_count(),
            vec![(Category::Channels, 2), (Category::Series, 2), (Category::Movies, 1)]
        );
    }

    #[test]
    fn test_outcome_total() {
        let outcome = SyncOutcome {
            created: 3,
            skipped: 4,
            errors: 1,
        };
        assert_eq!(outcome.total(), 8);
    }
}
