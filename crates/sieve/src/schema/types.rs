//! Core type definitions for column typing.

use serde::{Deserialize, Serialize};

/// Value kind shared by every non-missing cell of a column.
///
/// Only [`ColumnType::String`] columns are classified and normalized; the
/// other kinds cannot carry character corruption and are passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Text/string values.
    String,
    /// Boolean values (true/false).
    Boolean,
    /// Every value is missing.
    Unknown,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Returns true if cells of this type are scanned for character problems.
    pub fn is_textual(&self) -> bool {
        matches!(self, ColumnType::String)
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::String => "string",
            ColumnType::Boolean => "boolean",
            ColumnType::Unknown => "unknown",
        }
    }

    /// Merge the kind of one more value into the kind seen so far.
    pub(crate) fn merge(self, other: ColumnType) -> ColumnType {
        match (self, other) {
            (ColumnType::Unknown, t) | (t, ColumnType::Unknown) => t,
            (a, b) if a == b => a,
            (ColumnType::Integer, ColumnType::Float) | (ColumnType::Float, ColumnType::Integer) => {
                ColumnType::Float
            }
            _ => ColumnType::String,
        }
    }
}

impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_promotes_integer_to_float() {
        assert_eq!(ColumnType::Integer.merge(ColumnType::Float), ColumnType::Float);
        assert_eq!(ColumnType::Float.merge(ColumnType::Integer), ColumnType::Float);
    }

    #[test]
    fn test_merge_mixed_kinds_is_string() {
        assert_eq!(ColumnType::Boolean.merge(ColumnType::Integer), ColumnType::String);
        assert_eq!(ColumnType::String.merge(ColumnType::Float), ColumnType::String);
        assert_eq!(ColumnType::Unknown.merge(ColumnType::Boolean), ColumnType::Boolean);
    }

    #[test]
    fn test_only_strings_are_textual() {
        assert!(ColumnType::String.is_textual());
        assert!(!ColumnType::Integer.is_textual());
        assert!(!ColumnType::Unknown.is_textual());
    }
}
