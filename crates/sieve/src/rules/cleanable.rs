//! Characters with a deterministic replacement.

use serde::Serialize;

/// A single character substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CleanRule {
    /// Character to replace.
    pub source: char,
    /// Literal replacement text.
    pub replacement: &'static str,
    /// What the character is.
    pub label: &'static str,
}

impl CleanRule {
    /// Replace every occurrence of the source character.
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.source, self.replacement)
    }
}

/// Cleanable characters, in application order.
///
/// No replacement contains a source character, so order never changes the
/// result; it is fixed so output stays reproducible.
pub const CLEANABLE: &[CleanRule] = &[
    CleanRule { source: '\u{2122}', replacement: "", label: "Trademark" },
    CleanRule { source: '\u{00AE}', replacement: "", label: "Registered" },
    CleanRule { source: '\u{00A9}', replacement: "", label: "Copyright" },
    CleanRule { source: '\u{201C}', replacement: "\"", label: "Smart quote left" },
    CleanRule { source: '\u{201D}', replacement: "\"", label: "Smart quote right" },
    CleanRule { source: '\u{2018}', replacement: "'", label: "Smart apostrophe left" },
    CleanRule { source: '\u{2019}', replacement: "'", label: "Smart apostrophe right" },
    CleanRule { source: '\u{2013}', replacement: "-", label: "En dash" },
    CleanRule { source: '\u{2014}', replacement: "-", label: "Em dash" },
    CleanRule { source: '\u{2026}', replacement: "...", label: "Ellipsis" },
    CleanRule { source: '\u{200B}', replacement: "", label: "Zero-width space" },
    CleanRule { source: '\u{FEFF}', replacement: "", label: "Byte order mark" },
    CleanRule { source: '_', replacement: " ", label: "Underscore" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_replacement_contains_a_source() {
        for rule in CLEANABLE {
            for other in CLEANABLE {
                assert!(
                    !rule.replacement.contains(other.source),
                    "{} replacement re-matches {}",
                    rule.label,
                    other.label
                );
            }
        }
    }

    #[test]
    fn test_sources_are_unique() {
        for (i, rule) in CLEANABLE.iter().enumerate() {
            assert!(CLEANABLE[i + 1..].iter().all(|r| r.source != rule.source));
        }
    }

    #[test]
    fn test_smart_quotes_are_four_rules() {
        let quotes: Vec<char> = CLEANABLE
            .iter()
            .filter(|r| r.replacement == "\"" || r.replacement == "'")
            .map(|r| r.source)
            .collect();
        assert_eq!(quotes, vec!['\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}']);
    }

    #[test]
    fn test_apply_replaces_all_occurrences() {
        let dash = CLEANABLE.iter().find(|r| r.label == "En dash").unwrap();
        assert_eq!(dash.apply("1\u{2013}2\u{2013}3"), "1-2-3");
    }
}
