//! Configuration structures for the edge bridge.
//!
//! [`BridgeConfig`] holds the per-request translation settings. It can be
//! loaded from a TOML file (see [`crate::config_file`]) or built in code.

use serde::{Deserialize, Serialize};

/// Bridge translation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BridgeConfig {
    /// Scheme used when reconstructing the absolute request URL.
    ///
    /// Inbound requests normally carry an origin-form target (`/path`); the
    /// handler contract wants an absolute URL, so the bridge assembles
    /// `<scheme>://<host><path>`. The scheme is not observable on the socket
    /// behind a TLS terminator, so it is configured here.
    #[serde(default = "defaults::url_scheme")]
    pub url_scheme: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            url_scheme: defaults::url_scheme(),
        }
    }
}

/// Default value functions for serde.
mod defaults {
    pub fn url_scheme() -> String {
        "http".to_string()
    }
}
