//! Shared state for the roster engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// State handed to every request handler.
///
/// Wraps the loaded holiday calendar and scheduling policy in an `Arc`
/// so clones made per request share one configuration.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded configuration for sharing across handlers.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The holiday calendar and scheduling policy in use.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
