//! Issue records produced by detection.

use serde::{Deserialize, Serialize};

use crate::rules::UncleanableRule;

/// Occurrences of one uncleanable rule within one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Name of the rule that matched.
    #[serde(rename = "type")]
    pub rule: String,
    /// Rule description.
    pub description: String,
    /// Rule example.
    pub example: String,
    /// Number of non-overlapping matches.
    pub count: usize,
    /// First few matches, escaped so invisible characters are readable.
    pub found_chars: Vec<String>,
}

impl Issue {
    /// Create an issue for `rule` with the given match count and samples.
    pub fn new(rule: &UncleanableRule, count: usize, found_chars: Vec<String>) -> Self {
        Self {
            rule: rule.name.to_string(),
            description: rule.description.to_string(),
            example: rule.example.to_string(),
            count,
            found_chars,
        }
    }
}
