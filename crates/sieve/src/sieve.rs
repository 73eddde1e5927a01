//! Main Sieve struct and public API.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::analysis::{ColumnAnalyzer, ColumnReport};
use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig};
use crate::partition::{ReportLimits, RowPartitioner, RowProblem};
use crate::report::ProcessReport;

/// Configuration for a Sieve run.
#[derive(Debug, Clone, Default)]
pub struct SieveConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Limits applied to dirty-row diagnostics.
    pub limits: ReportLimits,
}

/// Result of processing one table.
///
/// `clean` and `dirty` together hold every original row exactly once.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Number of data rows in the table that was processed.
    pub original_row_count: usize,
    /// Rows without issues, textual columns normalized.
    pub clean: DataTable,
    /// Rows with at least one issue, exactly as read.
    pub dirty: DataTable,
    /// One entry per dirty row, in order.
    pub problems: Vec<RowProblem>,
    /// Per-column analysis of the original table.
    pub columns: ColumnReport,
}

impl ProcessOutcome {
    /// Number of rows in the original table.
    pub fn original_row_count(&self) -> usize {
        self.original_row_count
    }

    pub fn clean_row_count(&self) -> usize {
        self.clean.row_count()
    }

    pub fn dirty_row_count(&self) -> usize {
        self.dirty.row_count()
    }

    pub fn has_dirty_rows(&self) -> bool {
        !self.dirty.is_empty()
    }
}

/// The main ingestion gate.
///
/// Classifies every row of a table as clean or dirty, normalizes the clean
/// rows, and reports why each dirty row was rejected. Processing a table
/// that parsed successfully never fails, even when every row is dirty.
pub struct Sieve {
    config: SieveConfig,
    parser: Parser,
    partitioner: RowPartitioner,
    analyzer: ColumnAnalyzer,
}

impl Sieve {
    /// Create a new Sieve instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SieveConfig::default())
    }

    /// Create a Sieve instance with custom configuration.
    pub fn with_config(config: SieveConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let partitioner = RowPartitioner::with_limits(config.limits);

        Self {
            config,
            parser,
            partitioner,
            analyzer: ColumnAnalyzer::new(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    /// Process an already parsed table.
    pub fn process(&self, table: &DataTable) -> ProcessOutcome {
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            "processing table"
        );

        let partition = self.partitioner.partition(table);
        let columns = self.analyzer.analyze(table);

        let outcome = ProcessOutcome {
            original_row_count: table.row_count(),
            clean: partition.clean,
            dirty: partition.dirty,
            problems: partition.problems,
            columns,
        };

        info!(
            original = outcome.original_row_count(),
            clean = outcome.clean_row_count(),
            dirty = outcome.dirty_row_count(),
            "processing complete"
        );

        if outcome.has_dirty_rows() {
            let at_risk: Vec<&str> = outcome
                .columns
                .iter()
                .filter(|(_, analysis)| analysis.is_at_risk())
                .map(|(name, _)| name.as_str())
                .collect();
            warn!(
                dirty = outcome.dirty_row_count(),
                columns = ?at_risk,
                "found rows with uncleanable characters"
            );
        }

        outcome
    }

    /// Parse and process an in-memory buffer that came from `name`.
    pub fn process_bytes(&self, name: impl Into<String>, contents: &[u8]) -> Result<ProcessReport> {
        let (table, source) = self.parser.parse_named(name, contents)?;
        let outcome = self.process(&table);
        Ok(ProcessReport::new(source, outcome))
    }

    /// Parse and process a file on disk.
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<ProcessReport> {
        let (table, source) = self.parser.parse_file(path)?;
        let outcome = self.process(&table);
        Ok(ProcessReport::new(source, outcome))
    }
}

impl Default for Sieve {
    fn default() -> Self {
        Self::new()
    }
}
