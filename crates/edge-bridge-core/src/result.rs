//! Handler result decoding and body renormalization.

use serde::Deserialize;

use edge_bridge_common::BridgeError;

/// The decoded handler result.
#[derive(Debug, Clone, Deserialize)]
pub struct HandlerResult {
    /// HTTP status code for the response.
    pub status: u16,
    /// Response body text; may itself be a JSON document.
    pub body: String,
}

impl HandlerResult {
    /// Decode a handler's return string.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ResultDecode`] if the string is not a JSON
    /// object with an integer `status` and a string `body`.
    pub fn parse(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::result_decode(e.to_string()))
    }
}

/// Re-encode a body that happens to be valid JSON; pass anything else
/// through unchanged.
///
/// This is a normalization pass, not a validation gate: it never rejects.
/// Re-parsing the output of a successful renormalization yields a value
/// deeply equal to the original parse.
pub fn renormalize_json(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => body.to_string(),
    }
}
