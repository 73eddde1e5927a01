//! Column typing: which columns are textual and get classified.

mod inference;
mod types;

pub use inference::{infer_column_type, infer_column_types};
pub use types::ColumnType;
