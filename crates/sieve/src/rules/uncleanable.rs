//! Patterns that mark a value as corrupted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A named corruption detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UncleanableRule {
    /// Stable identifier reported in issues.
    pub name: &'static str,
    /// Regex source of the matcher.
    pub pattern: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Human-readable example of what matches.
    pub example: &'static str,
}

// The code point ranges below are shared with downstream mainframe-migration
// tooling and must not change.
/// Uncleanable patterns, each evaluated independently.
pub const UNCLEANABLE: &[UncleanableRule] = &[
    UncleanableRule {
        name: "null_char",
        pattern: r"\x00",
        description: "NULL character - Binary data corruption",
        example: r"\x00",
    },
    UncleanableRule {
        name: "control_chars",
        pattern: r"[\x01-\x08\x0B\x0C\x0E-\x1F]",
        description: "Control characters - Mainframe/Legacy system artifacts",
        example: r"\x01-\x1F",
    },
    UncleanableRule {
        name: "escape_char",
        pattern: r"\x1B",
        description: "Escape character - Terminal sequences",
        example: r"\x1B",
    },
    UncleanableRule {
        name: "ebcdic_newline",
        pattern: r"\x85",
        description: "EBCDIC Newline - Mainframe data",
        example: r"\x85",
    },
    UncleanableRule {
        name: "ebcdic_artifacts",
        pattern: r"[\x8D\x8F\x90\x9D]",
        description: "EBCDIC conversion artifacts - Mainframe migration issue",
        example: r"\x8D, \x8F, etc.",
    },
    UncleanableRule {
        name: "replacement_char",
        pattern: r"\x{FFFD}",
        description: "Replacement character - Encoding error (data loss)",
        example: "\u{FFFD}",
    },
    UncleanableRule {
        name: "private_use",
        pattern: r"[\x{E000}-\x{F8FF}]",
        description: "Private Use Area - Custom/proprietary characters",
        example: "Private Unicode",
    },
];

// Compiled once on first use, in the same order as UNCLEANABLE.
static COMPILED: Lazy<Vec<Regex>> = Lazy::new(|| {
    UNCLEANABLE
        .iter()
        .map(|rule| Regex::new(rule.pattern).unwrap())
        .collect()
});

/// Every uncleanable rule paired with its compiled matcher.
pub fn compiled_rules() -> impl Iterator<Item = (&'static UncleanableRule, &'static Regex)> {
    UNCLEANABLE.iter().zip(COMPILED.iter())
}
