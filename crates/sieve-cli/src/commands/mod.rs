//! CLI command implementations.

pub mod rules;
pub mod scan;
pub mod serve;
