//! HTTP boundary around the Sieve library.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
