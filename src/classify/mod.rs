//! Group-label classification
//!
//! Rules are data (`ClassifierRules`), so categories, triggers and
//! exclusions can be changed in the config file without code changes.

mod classifier;
mod rules;

pub use classifier::{Classification, Classifier};
pub use rules::{CategoryRule, ClassifierRules};
