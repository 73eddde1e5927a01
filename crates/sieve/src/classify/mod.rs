//! Per-cell normalization and corruption detection.

mod cell;
mod issue;

pub use cell::{
    CellClassifier, DEFAULT_MAX_SAMPLES, detect_issues, escape_literal, has_uncleanable_chars,
    normalize,
};
pub use issue::Issue;
