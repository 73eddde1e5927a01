//! Column-level risk analysis over the original table.

mod columns;

pub use columns::{ColumnAnalysis, ColumnAnalyzer, ColumnReport};
