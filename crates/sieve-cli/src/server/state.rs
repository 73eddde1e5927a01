//! Application state for the web server.

use std::sync::Arc;

use sieve::{Sieve, SieveConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The configured gate, shared read-only across requests.
    pub sieve: Arc<Sieve>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: SieveConfig) -> Self {
        Self {
            sieve: Arc::new(Sieve::with_config(config)),
        }
    }
}
