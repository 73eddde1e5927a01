//! Cell-level normalization and detection.
//!
//! Normalization and detection are independent passes over the same raw
//! value. Detection never sees normalized text, and neither pass mutates
//! its input.

use crate::rules::{CLEANABLE, compiled_rules};

use super::issue::Issue;

/// Default number of sample matches kept per issue.
pub const DEFAULT_MAX_SAMPLES: usize = 3;

/// Classifies single cell values.
#[derive(Debug, Clone, Copy)]
pub struct CellClassifier {
    max_samples: usize,
}

impl CellClassifier {
    /// Create a classifier keeping [`DEFAULT_MAX_SAMPLES`] samples per issue.
    pub fn new() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }

    /// Create a classifier keeping at most `max_samples` samples per issue.
    pub fn with_max_samples(max_samples: usize) -> Self {
        Self { max_samples }
    }

    /// Normalize a possibly missing cell. Missing cells become empty text.
    pub fn normalize_cell(&self, value: Option<&str>) -> String {
        value.map(normalize).unwrap_or_default()
    }

    /// Detect issues in a possibly missing cell. Missing cells have none.
    pub fn detect_cell_issues(&self, value: Option<&str>) -> Vec<Issue> {
        match value {
            Some(text) => self.detect_issues(text),
            None => Vec::new(),
        }
    }

    /// Detect every uncleanable pattern in `value`.
    pub fn detect_issues(&self, value: &str) -> Vec<Issue> {
        compiled_rules()
            .filter_map(|(rule, matcher)| {
                let mut count = 0;
                let mut samples = Vec::new();

                for found in matcher.find_iter(value) {
                    count += 1;
                    if samples.len() < self.max_samples {
                        samples.push(escape_literal(found.as_str()));
                    }
                }

                (count > 0).then(|| Issue::new(rule, count, samples))
            })
            .collect()
    }
}

impl Default for CellClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply every cleanable substitution, then collapse and trim whitespace.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(value: &str) -> String {
    let mut text = value.to_string();

    for rule in CLEANABLE {
        if text.contains(rule.source) {
            text = rule.apply(&text);
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Detect uncleanable patterns with the default sample limit.
pub fn detect_issues(value: &str) -> Vec<Issue> {
    CellClassifier::new().detect_issues(value)
}

/// Check whether any uncleanable pattern occurs in `value`.
///
/// Same answer as `!detect_issues(value).is_empty()`, without building issues.
pub fn has_uncleanable_chars(value: &str) -> bool {
    compiled_rules().any(|(_, matcher)| matcher.is_match(value))
}

/// Render text as a quoted literal with invisible characters escaped.
///
/// `"a\0"` becomes `'a\x00'` and U+E001 becomes `'\ue001'`.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');

    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if needs_escape(c) => {
                let code = c as u32;
                let escaped = if code <= 0xFF {
                    format!("\\x{:02x}", code)
                } else if code <= 0xFFFF {
                    format!("\\u{:04x}", code)
                } else {
                    format!("\\U{:08x}", code)
                };
                out.push_str(&escaped);
            }
            c => out.push(c),
        }
    }

    out.push('\'');
    out
}

/// Characters that would be invisible or ambiguous when printed as-is.
fn needs_escape(c: char) -> bool {
    c.is_control()
        || (c.is_whitespace() && c != ' ')
        || matches!(
            c,
            '\u{00AD}'
                | '\u{200B}'..='\u{200F}'
                | '\u{202A}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{E000}'..='\u{F8FF}'
                | '\u{FEFF}'
                | '\u{FFFD}'
                | '\u{F0000}'..='\u{10FFFF}'
        )
}
