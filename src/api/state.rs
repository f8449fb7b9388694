//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently just the loaded rate tables.
#[derive(Clone)]
pub struct AppState {
    /// The loaded effective-dated rate tables.
    rates: Arc<RateLoader>,
}

impl AppState {
    /// Creates a new application state with the given rate loader.
    pub fn new(rates: RateLoader) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns a reference to the rate loader.
    pub fn rates(&self) -> &RateLoader {
        &self.rates
    }
}
