//! Diagnostic records for dirty rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::{DEFAULT_MAX_SAMPLES, Issue};

/// Presentation limits applied while building diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLimits {
    /// Characters kept per column in a row preview.
    pub row_preview_chars: usize,
    /// Characters kept of a value that has issues.
    pub issue_value_chars: usize,
    /// Sample matches kept per issue.
    pub max_samples: usize,
}

impl ReportLimits {
    pub const DEFAULT_ROW_PREVIEW_CHARS: usize = 50;
    pub const DEFAULT_ISSUE_VALUE_CHARS: usize = 100;
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            row_preview_chars: Self::DEFAULT_ROW_PREVIEW_CHARS,
            issue_value_chars: Self::DEFAULT_ISSUE_VALUE_CHARS,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

/// Issues found in one column of a dirty row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProblem {
    /// Column name.
    pub column: String,
    /// Raw value, truncated to `issue_value_chars`.
    pub value: String,
    /// Issues found in the raw value.
    pub issues: Vec<Issue>,
}

/// Everything reported about one dirty row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowProblem {
    /// Zero-based position in the original table.
    pub row_index: usize,
    /// Line-style row number: one-based, counting the header row.
    pub row_number: usize,
    /// Every column's raw value, truncated to `row_preview_chars`.
    pub row_data: IndexMap<String, String>,
    /// Columns with issues, in header order.
    pub problems: Vec<ColumnProblem>,
}

impl RowProblem {
    /// Total matches across all columns and rules.
    pub fn issue_count(&self) -> usize {
        self.problems
            .iter()
            .flat_map(|p| p.issues.iter())
            .map(|i| i.count)
            .sum()
    }

    /// Names of the columns with issues.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|p| p.column.as_str())
    }
}

/// Display row number for an original row index.
pub(crate) fn display_row_number(index: usize) -> usize {
    index + 2
}

/// Keep at most `max_chars` characters of `value`.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => value[..end].to_string(),
        None => value.to_string(),
    }
}
