//! Error types for the edge bridge.
//!
//! This module defines the failure taxonomy using `thiserror`:
//! - [`BridgeError`]: failures of the request/response translation
//! - [`HandlerError`]: failures raised by the embedded request handler

use std::io;

use thiserror::Error;

/// Failures of the request/response translation.
///
/// Every variant except configuration and I/O errors corresponds to a point
/// in the per-request pipeline; all of them collapse to a 500 response with
/// a JSON `{"error": ...}` body at the HTTP boundary.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The inbound payload could not be fully read.
    #[error("Failed to read request body: {reason}")]
    BodyRead {
        /// Description of the read failure.
        reason: String,
    },

    /// The embedded handler raised a failure instead of returning a result.
    ///
    /// Transparent so the handler's own diagnostic reaches the error body
    /// unchanged.
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// The handler's return value is not valid JSON or lacks the required
    /// `status`/`body` fields.
    #[error("Invalid handler result: {reason}")]
    ResultDecode {
        /// Description of the decode failure.
        reason: String,
    },

    /// JSON encoding failed while flattening the request.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration was provided.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl BridgeError {
    /// Create a new `BodyRead` error.
    pub fn body_read(reason: impl Into<String>) -> Self {
        Self::BodyRead {
            reason: reason.into(),
        }
    }

    /// Create a new `ResultDecode` error.
    pub fn result_decode(reason: impl Into<String>) -> Self {
        Self::ResultDecode {
            reason: reason.into(),
        }
    }

    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error was raised by the embedded handler.
    pub fn is_handler_failure(&self) -> bool {
        matches!(self, Self::Handler(_))
    }

    /// Returns `true` if this error indicates a malformed handler result.
    pub fn is_result_decode(&self) -> bool {
        matches!(self, Self::ResultDecode { .. })
    }
}

/// A failure raised by the embedded request handler.
///
/// Displays as the bare message so the bridge can surface it verbatim in
/// the `{"error": ...}` response body.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct HandlerError {
    /// Diagnostic text carried by the failure.
    pub message: String,
}

impl HandlerError {
    /// Create a new handler failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
