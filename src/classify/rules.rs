use crate::model::Category;
use serde::{Deserialize, Serialize};

/// Triggers for one destination category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,

    /// Matched as a prefix of the label, or case-insensitively anywhere in it
    pub triggers: Vec<String>,

    /// Group label prefix removed when the group is used as a folder name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_prefix: Option<String>,
}

/// Ordered classification rules plus the exclusion list
///
/// Both the order of `categories` and the order of triggers inside each
/// rule matter: the first matching trigger wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// Terms that reject a label outright when found anywhere in it
    pub exclusions: Vec<String>,

    pub categories: Vec<CategoryRule>,
}

impl ClassifierRules {
    /// Look up the rule for a category
    pub fn rule_for(&self, category: Category) -> Option<&CategoryRule> {
        self.categories.iter().find(|rule| rule.category == category)
    }

    /// Folder prefix configured for a category, if any
    pub fn folder_prefix(&self, category: Category) -> Option<&str> {
        self.rule_for(category)
            .and_then(|rule| rule.folder_prefix.as_deref())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            exclusions: strings(&[
                "Adult",
                "Adulto",
                "XXX",
                "+18",
                "18+",
                "Canais | Adultos",
                "Filmes | Adultos",
            ]),
            categories: vec![
                CategoryRule {
                    category: Category::Channels,
                    triggers: strings(&["Canais |"]),
                    folder_prefix: Some("Canais | ".to_string()),
                },
                CategoryRule {
                    category: Category::Movies,
                    triggers: strings(&["Filmes |", "Filmes Dublados", "Filmes Legendados", "VOD |"]),
                    folder_prefix: None,
                },
                CategoryRule {
                    category: Category::Series,
                    triggers: strings(&["Series |", "Novelas", "Animes |"]),
                    folder_prefix: Some("Series | ".to_string()),
                },
            ],
        }
    }
}
