use super::rules::ClassifierRules;
use crate::model::{Category, ClassifiedItem, RawEntry};
use crate::report::ManifestSummary;

/// Outcome of classifying a group label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// First matching category
    Accepted(Category),

    /// An exclusion term occurs in the label
    Excluded { term: String },

    /// No category trigger matched
    Unmatched,
}

impl Classification {
    /// The category, if the label was accepted
    pub fn category(&self) -> Option<Category> {
        match self {
            Classification::Accepted(category) => Some(*category),
            _ => None,
        }
    }
}

/// Lower-cased trigger alongside the original
#[derive(Debug, Clone)]
struct Trigger {
    original: String,
    lowered: String,
}

/// Maps raw group labels to categories using `ClassifierRules`
///
/// Matching per trigger is two-part: the label starts with the trigger
/// as written, or the lower-cased trigger occurs anywhere in the
/// lower-cased label. Short common triggers therefore match broadly;
/// keep trigger lists curated.
#[derive(Debug, Clone)]
pub struct Classifier {
    exclusions: Vec<Trigger>,
    categories: Vec<(Category, Vec<Trigger>)>,
}

impl Classifier {
    /// Build a classifier from rules; empty terms and triggers are ignored
    pub fn new(rules: &ClassifierRules) -> Self {
        let exclusions = compile(&rules.exclusions);
        let categories = rules
            .categories
            .iter()
            .map(|rule| (rule.category, compile(&rule.triggers)))
            .collect();

        Self {
            exclusions,
            categories,
        }
    }

    /// Classify a group label
    pub fn classify(&self, label: &str) -> Classification {
        let lowered = label.to_lowercase();

        // Exclusions take priority over every category trigger
        if let Some(term) = self
            .exclusions
            .iter()
            .find(|term| lowered.contains(&term.lowered))
        {
            return Classification::Excluded {
                term: term.original.clone(),
            };
        }

        for (category, triggers) in &self.categories {
            let hit = triggers.iter().any(|trigger| {
                label.starts_with(&trigger.original) || lowered.contains(&trigger.lowered)
            });
            if hit {
                return Classification::Accepted(*category);
            }
        }

        Classification::Unmatched
    }

    /// Classify parsed entries, dropping rejected ones
    ///
    /// Returned items keep manifest order.
    pub fn classify_all(&self, entries: Vec<RawEntry>) -> (Vec<ClassifiedItem>, ManifestSummary) {
        let mut summary = ManifestSummary {
            parsed: entries.len(),
            ..Default::default()
        };
        let mut items = Vec::with_capacity(entries.len());

        for entry in entries {
            match self.classify(&entry.group) {
                Classification::Accepted(category) => {
                    summary.record_accepted(category, &entry.group);
                    items.push(ClassifiedItem::new(entry, category));
                }
                Classification::Excluded { term } => {
                    log::debug!("Excluded '{}' (group '{}' matches '{}')", entry.name, entry.group, term);
                    summary.excluded += 1;
                }
                Classification::Unmatched => {
                    log::debug!("No category for '{}' (group '{}')", entry.name, entry.group);
                    summary.unmatched += 1;
                }
            }
        }

        log::info!("Classified {} of {} entries", items.len(), summary.parsed);
        (items, summary)
    }
}

fn compile(terms: &[String]) -> Vec<Trigger> {
    terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| Trigger {
            original: term.clone(),
            lowered: term.to_lowercase(),
        })
        .collect()
}
