//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig, TextEncoding};
pub use source::{DataTable, SourceMetadata, content_hash};
