//! API request handlers.

mod clean;
mod health;
mod rules;

pub use clean::*;
pub use health::*;
pub use rules::*;
