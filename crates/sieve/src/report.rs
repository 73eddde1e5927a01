//! Serializable view of a processing outcome.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::ColumnReport;
use crate::error::{Result, SieveError};
use crate::input::SourceMetadata;
use crate::partition::RowProblem;
use crate::sieve::ProcessOutcome;

/// Row counts of a processing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSummary {
    pub original_row_count: usize,
    pub clean_row_count: usize,
    pub dirty_row_count: usize,
    pub has_dirty_rows: bool,
}

impl From<&ProcessOutcome> for ProcessSummary {
    fn from(outcome: &ProcessOutcome) -> Self {
        Self {
            original_row_count: outcome.original_row_count(),
            clean_row_count: outcome.clean_row_count(),
            dirty_row_count: outcome.dirty_row_count(),
            has_dirty_rows: outcome.has_dirty_rows(),
        }
    }
}

/// Counts, dirty-row details and column analysis, ready to serialize.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics<'a> {
    #[serde(flatten)]
    pub summary: ProcessSummary,
    pub dirty_row_details: &'a [RowProblem],
    pub column_analysis: &'a ColumnReport,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    source: &'a SourceMetadata,
    #[serde(flatten)]
    diagnostics: Diagnostics<'a>,
}

/// Outcome of processing one source, together with where it came from.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    /// Metadata about the source data.
    pub source: SourceMetadata,
    /// The partitioned tables and diagnostics.
    pub outcome: ProcessOutcome,
}

impl ProcessReport {
    pub fn new(source: SourceMetadata, outcome: ProcessOutcome) -> Self {
        Self { source, outcome }
    }

    /// Row counts.
    pub fn summary(&self) -> ProcessSummary {
        ProcessSummary::from(&self.outcome)
    }

    /// Borrowed diagnostics for serialization.
    pub fn diagnostics(&self) -> Diagnostics<'_> {
        Diagnostics {
            summary: self.summary(),
            dirty_row_details: &self.outcome.problems,
            column_analysis: &self.outcome.columns,
        }
    }

    /// The clean table as delimited text.
    pub fn clean_csv(&self) -> Result<Vec<u8>> {
        self.outcome.clean.to_csv_bytes()
    }

    /// The dirty rows as delimited text.
    ///
    /// Cell text is not normalized. Missing-value markers are written as
    /// empty fields, the same as in `clean_csv`.
    pub fn dirty_csv(&self) -> Result<Vec<u8>> {
        self.outcome.dirty.to_csv_bytes()
    }

    /// The full report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document())?)
    }

    /// Write the full report to a JSON file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SieveError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = File::create(path).map_err(|e| SieveError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.document())?;

        Ok(())
    }

    fn document(&self) -> ReportDocument<'_> {
        ReportDocument {
            source: &self.source,
            diagnostics: self.diagnostics(),
        }
    }
}
