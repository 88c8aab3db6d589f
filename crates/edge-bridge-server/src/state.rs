//! Shared application state.
//!
//! This module provides [`AppState`], which holds shared resources
//! across all HTTP request handlers.

use std::sync::Arc;

use edge_bridge_common::BridgeConfig;
use edge_bridge_core::{HandlerRunner, RequestHandler};

/// Shared state across all request handlers.
///
/// This struct is cloned for each request; the runner sits behind an `Arc`.
/// Nothing here is mutable: each request is fully independent.
#[derive(Clone)]
pub struct AppState {
    /// Dispatch pipeline around the embedded handler.
    runner: Arc<HandlerRunner>,

    /// Bridge translation configuration.
    config: BridgeConfig,
}

impl AppState {
    /// Create new application state around an embedded handler.
    pub fn new(config: BridgeConfig, handler: Arc<dyn RequestHandler>) -> Self {
        Self {
            runner: Arc::new(HandlerRunner::new(handler)),
            config,
        }
    }

    /// Get the dispatch runner.
    pub fn runner(&self) -> &HandlerRunner {
        &self.runner
    }

    /// Get the bridge configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
