//! Extra rules for the default file-type heuristic.

use serde::{Deserialize, Serialize};

/// A single `pattern -> file_type` rule. Patterns use glob syntax and are
/// matched against the lowercased basename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierRule {
    pub pattern: String,
    pub file_type: String,
}

/// Rules consulted before the built-in table, in order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    pub rules: Vec<ClassifierRule>,
}
