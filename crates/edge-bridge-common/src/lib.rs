//! Common types, errors, and configuration for edge-bridge.
//!
//! This crate provides shared functionality used across the edge-bridge workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - Configuration structures for bridge settings
//! - TOML configuration file loading

pub mod config;
pub mod config_file;
pub mod error;

pub use config::BridgeConfig;
pub use config_file::{ConfigFile, ConfigFileError, ServerConfigFile};
pub use error::{BridgeError, HandlerError};
