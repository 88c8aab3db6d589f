//! Flattened HTTP request passed to the embedded handler.

/// A flattened HTTP request.
///
/// The header sequence preserves the iteration order of the source header
/// map, duplicates included. For GET/HEAD requests the body is always the
/// empty string; extraction enforces that rule before constructing the
/// call.
#[derive(Debug, Clone)]
pub struct HandlerCall {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Absolute request URL.
    pub url: String,
    /// Header pairs in iteration order, duplicates allowed.
    pub headers: Vec<(String, String)>,
    /// Request body text; empty for GET/HEAD.
    pub body: String,
}

impl HandlerCall {
    /// Create a new call with no headers and an empty body.
    pub fn new(method: &str, url: &str) -> Self {
        Self {
            method: method.to_string(),
            url: url.to_string(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Encode the header pairs as a JSON array of `[name, value]` arrays.
    ///
    /// Count and order match the `headers` field exactly.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if encoding fails.
    pub fn headers_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.headers)
    }
}
