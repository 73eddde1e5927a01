//! Per-column report of uncleanable characters.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::has_uncleanable_chars;
use crate::input::DataTable;
use crate::schema::ColumnType;

/// Column name to analysis, in header order.
pub type ColumnReport = IndexMap<String, ColumnAnalysis>;

/// Analysis of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAnalysis {
    /// Kind of the column's values.
    #[serde(rename = "type")]
    pub value_kind: ColumnType,
    /// Whether any value ever held an uncleanable character.
    ///
    /// `None` means the column is not textual and was not checked.
    pub had_unclenable_chars: Option<bool>,
}

impl ColumnAnalysis {
    /// A textual column that was scanned.
    pub fn checked(had_unclenable_chars: bool) -> Self {
        Self {
            value_kind: ColumnType::String,
            had_unclenable_chars: Some(had_unclenable_chars),
        }
    }

    /// A non-textual column that was not scanned.
    pub fn not_applicable(value_kind: ColumnType) -> Self {
        Self {
            value_kind,
            had_unclenable_chars: None,
        }
    }

    /// Check whether the column was scanned.
    pub fn is_checked(&self) -> bool {
        self.had_unclenable_chars.is_some()
    }

    /// Check whether the column held at least one uncleanable character.
    pub fn is_at_risk(&self) -> bool {
        self.had_unclenable_chars == Some(true)
    }
}

/// Reports which columns carry uncleanable characters.
///
/// Runs over every row of the table it is given, independently of how rows
/// were partitioned: a column is at risk if any of its cells has an issue,
/// whatever the other cells of that row look like.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnAnalyzer;

impl ColumnAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyze every column of `table`.
    pub fn analyze(&self, table: &DataTable) -> ColumnReport {
        table
            .headers
            .iter()
            .enumerate()
            .map(|(col, name)| (name.clone(), self.analyze_column(table, col)))
            .collect()
    }

    /// Analyze the column at `col`.
    pub fn analyze_column(&self, table: &DataTable, col: usize) -> ColumnAnalysis {
        let kind = table.column_type(col);
        if !kind.is_textual() {
            return ColumnAnalysis::not_applicable(kind);
        }

        let at_risk = table
            .column_values(col)
            .filter(|value| !DataTable::is_null_value(value))
            .any(has_uncleanable_chars);

        ColumnAnalysis::checked(at_risk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTable {
        DataTable::new(
            vec![
                "id".to_string(),
                "name".to_string(),
                "city".to_string(),
                "empty".to_string(),
            ],
            vec![
                vec!["1".to_string(), "ok".to_string(), "Oslo".to_string(), String::new()],
                vec!["2".to_string(), "bad\u{85}".to_string(), "Bergen\u{0}".to_string(), String::new()],
                vec!["3".to_string(), "fine".to_string(), "Tromsø".to_string(), "NA".to_string()],
            ],
            b',',
        )
    }

    #[test]
    fn test_report_covers_every_column() {
        let report = ColumnAnalyzer::new().analyze(&table());
        let names: Vec<&str> = report.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "city", "empty"]);
    }

    #[test]
    fn test_textual_columns_are_checked() {
        let report = ColumnAnalyzer::new().analyze(&table());
        assert_eq!(report["name"], ColumnAnalysis::checked(true));
        assert_eq!(report["city"], ColumnAnalysis::checked(true));
    }

    #[test]
    fn test_non_textual_columns_are_not_applicable() {
        let report = ColumnAnalyzer::new().analyze(&table());
        assert_eq!(report["id"], ColumnAnalysis::not_applicable(ColumnType::Integer));
        assert!(!report["id"].is_checked());
        assert_eq!(report["empty"].value_kind, ColumnType::Unknown);
        assert!(!report["empty"].is_checked());
    }

    #[test]
    fn test_clean_column_reports_false() {
        let t = DataTable::new(
            vec!["name".to_string()],
            vec![vec!["café™".to_string()], vec!["a_b".to_string()]],
            b',',
        );
        let report = ColumnAnalyzer::new().analyze(&t);
        assert!(report["name"].is_checked());
        assert!(!report["name"].is_at_risk());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ColumnAnalysis::checked(false)).unwrap();
        assert_eq!(json["type"], "string");
        assert_eq!(json["had_unclenable_chars"], false);

        let json = serde_json::to_value(ColumnAnalysis::not_applicable(ColumnType::Float)).unwrap();
        assert_eq!(json["type"], "float");
        assert!(json["had_unclenable_chars"].is_null());
    }
}
