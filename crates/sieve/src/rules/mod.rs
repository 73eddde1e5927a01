//! The fixed character taxonomies.
//!
//! [`CLEANABLE`] lists characters with a safe textual substitute; they are
//! rewritten during normalization. [`UNCLEANABLE`] lists patterns that signal
//! corruption or an encoding mismatch; any match disqualifies a row from
//! normalization. Both tables are immutable and shared read-only.

mod cleanable;
mod uncleanable;

pub use cleanable::{CLEANABLE, CleanRule};
pub use uncleanable::{UNCLEANABLE, UncleanableRule, compiled_rules};
