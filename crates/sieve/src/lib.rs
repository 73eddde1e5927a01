//! Sieve: an ingestion gate for delimited text tables.
//!
//! Sieve splits an incoming table into rows that are safe to load and rows
//! that carry characters no automatic fix can repair.
//!
//! # Core Principles
//!
//! - **Two taxonomies**: cleanable characters (trademark signs, smart quotes,
//!   dashes, zero-width marks) are normalized away; uncleanable ones (NUL,
//!   control characters, EBCDIC artifacts, replacement and private-use
//!   characters) quarantine the whole row
//! - **Non-destructive**: dirty rows are passed through exactly as read
//! - **Traceable**: every dirty row reports its original position, a preview,
//!   and which rule matched in which column
//!
//! # Example
//!
//! ```no_run
//! use sieve::Sieve;
//!
//! let sieve = Sieve::new();
//! let report = sieve.process_file("customers.csv").unwrap();
//!
//! println!("Clean rows: {}", report.outcome.clean_row_count());
//! println!("Dirty rows: {}", report.outcome.dirty_row_count());
//! ```

pub mod analysis;
pub mod classify;
pub mod error;
pub mod input;
pub mod partition;
pub mod report;
pub mod rules;
pub mod schema;

mod sieve;

pub use crate::sieve::{ProcessOutcome, Sieve, SieveConfig};
pub use analysis::{ColumnAnalysis, ColumnAnalyzer, ColumnReport};
pub use classify::{CellClassifier, Issue, detect_issues, has_uncleanable_chars, normalize};
pub use error::{Result, SieveError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata, TextEncoding};
pub use partition::{ColumnProblem, Partition, ReportLimits, RowPartitioner, RowProblem};
pub use report::{Diagnostics, ProcessReport, ProcessSummary};
pub use rules::{CLEANABLE, CleanRule, UNCLEANABLE, UncleanableRule};
pub use schema::ColumnType;
