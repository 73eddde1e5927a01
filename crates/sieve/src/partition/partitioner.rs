//! Splitting a table into clean and dirty rows.

use tracing::debug;

use crate::classify::normalize;
use crate::input::DataTable;

use super::problem::{ReportLimits, RowProblem};
use super::row::{RowOutcome, classify_row};

/// Result of partitioning a table.
///
/// Every input row lands in exactly one of `clean` and `dirty`, in its
/// original relative order. `problems[i]` describes `dirty.rows[i]`.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Rows without issues, with textual columns normalized.
    pub clean: DataTable,
    /// Rows with issues, exactly as they were read.
    pub dirty: DataTable,
    /// Diagnostics for each dirty row.
    pub problems: Vec<RowProblem>,
}

/// Splits tables into clean and dirty rows.
#[derive(Debug, Clone, Default)]
pub struct RowPartitioner {
    limits: ReportLimits,
}

impl RowPartitioner {
    /// Create a partitioner with default report limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a partitioner with custom report limits.
    pub fn with_limits(limits: ReportLimits) -> Self {
        Self { limits }
    }

    /// Get the report limits.
    pub fn limits(&self) -> &ReportLimits {
        &self.limits
    }

    /// Classify each row lazily, yielding its position and outcome.
    pub fn outcomes<'a>(
        &'a self,
        table: &'a DataTable,
    ) -> impl Iterator<Item = (usize, RowOutcome)> + 'a {
        (0..table.row_count()).map(move |row| (row, classify_row(table, row, &self.limits)))
    }

    /// Partition `table`, then normalize the clean rows.
    pub fn partition(&self, table: &DataTable) -> Partition {
        let mut clean = table.empty_like();
        let mut dirty = table.empty_like();
        let mut problems = Vec::new();

        for (row, outcome) in self.outcomes(table) {
            let index = table.original_index(row).unwrap_or(row);
            let values = table.rows[row].clone();

            match outcome {
                RowOutcome::Clean => clean.push_row(index, values),
                RowOutcome::Dirty(problem) => {
                    dirty.push_row(index, values);
                    problems.push(problem);
                }
            }
        }

        debug!(
            clean = clean.row_count(),
            dirty = dirty.row_count(),
            "partitioned rows"
        );

        normalize_textual_columns(&mut clean);

        Partition {
            clean,
            dirty,
            problems,
        }
    }
}

/// Normalize every textual cell in place. Missing cells become empty.
fn normalize_textual_columns(table: &mut DataTable) {
    let textual = table.textual_columns();

    for row in &mut table.rows {
        for &col in &textual {
            if let Some(value) = row.get_mut(col) {
                *value = if DataTable::is_null_value(value) {
                    String::new()
                } else {
                    normalize(value)
                };
            }
        }
    }
}
