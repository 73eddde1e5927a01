//! Row-level partitioning into clean and dirty tables.

mod partitioner;
mod problem;
mod row;

pub use partitioner::{Partition, RowPartitioner};
pub use problem::{ColumnProblem, ReportLimits, RowProblem, truncate_chars};
pub use row::{RowOutcome, classify_row};
