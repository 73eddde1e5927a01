//! Classification of a single row.

use indexmap::IndexMap;

use crate::classify::CellClassifier;
use crate::input::DataTable;

use super::problem::{ColumnProblem, ReportLimits, RowProblem, display_row_number, truncate_chars};

/// Outcome of classifying one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// No textual cell has an issue; the row may be normalized.
    Clean,
    /// At least one textual cell has an issue.
    Dirty(RowProblem),
}

impl RowOutcome {
    /// Check if the row is dirty.
    pub fn is_dirty(&self) -> bool {
        matches!(self, RowOutcome::Dirty(_))
    }
}

/// Classify the row at position `row` of `table`.
///
/// Only textual, non-missing cells are inspected, so a row without textual
/// columns is always clean. The row itself is never modified.
pub fn classify_row(table: &DataTable, row: usize, limits: &ReportLimits) -> RowOutcome {
    let classifier = CellClassifier::with_max_samples(limits.max_samples);
    let values = match table.rows.get(row) {
        Some(values) => values,
        None => return RowOutcome::Clean,
    };

    let mut problems = Vec::new();
    for (col, value) in values.iter().enumerate() {
        if !table.is_textual(col) || DataTable::is_null_value(value) {
            continue;
        }

        let issues = classifier.detect_issues(value);
        if !issues.is_empty() {
            problems.push(ColumnProblem {
                column: table.headers[col].clone(),
                value: truncate_chars(value, limits.issue_value_chars),
                issues,
            });
        }
    }

    if problems.is_empty() {
        return RowOutcome::Clean;
    }

    let row_index = table.original_index(row).unwrap_or(row);
    let row_data: IndexMap<String, String> = table
        .headers
        .iter()
        .zip(values.iter())
        .map(|(header, value)| {
            (
                header.clone(),
                truncate_chars(value, limits.row_preview_chars),
            )
        })
        .collect();

    RowOutcome::Dirty(RowProblem {
        row_index,
        row_number: display_row_number(row_index),
        row_data,
        problems,
    })
}
