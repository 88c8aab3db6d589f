//! HTTP server for edge-bridge.
//!
//! This crate provides the HTTP boundary of the bridge. It handles:
//!
//! - Flattening inbound requests into handler calls
//! - Dispatching through the embedded handler
//! - Translating handler results back into HTTP responses
//! - Server lifecycle and graceful shutdown
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use edge_bridge_common::BridgeConfig;
//! use edge_bridge_server::{BridgeServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let handler = Arc::new(|_: &str, _: &str, _: &str, _: &str| {
//!         Ok(r#"{"status":200,"body":"{\"ok\":true}"}"#.to_string())
//!     });
//!
//!     let server = BridgeServer::new(BridgeConfig::default(), ServerConfig::default(), handler);
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod router;
pub mod server;
pub mod state;

pub use server::{BridgeServer, ServerConfig};
pub use state::AppState;
