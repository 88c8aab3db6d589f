//! The request-handler capability.
//!
//! The embedded handler contains all real request-handling logic; the
//! bridge consumes it only through the flat call contract defined here.

use edge_bridge_common::HandlerError;

/// The embedded request handler the bridge forwards to.
///
/// Implementations receive the flattened request and return the result
/// document as a JSON string:
///
/// - `headers_json` is a JSON array of `[name, value]` string pairs.
/// - The return value must decode to `{ "status": <int>, "body": <string> }`.
///
/// The call is synchronous: once invoked, the bridge does not suspend until
/// the handler returns. Implementations must be shareable across request
/// tasks.
pub trait RequestHandler: Send + Sync {
    /// Handle one flattened request.
    ///
    /// # Errors
    ///
    /// Returns a [`HandlerError`] if the handler cannot produce a result;
    /// the bridge surfaces the message verbatim in a 500 response.
    fn handle_request(
        &self,
        method: &str,
        url: &str,
        headers_json: &str,
        body: &str,
    ) -> Result<String, HandlerError>;
}

/// Closures with the flat signature are handlers.
///
/// This keeps test doubles to a one-liner and lets binaries wire a plain
/// function as the handler.
impl<F> RequestHandler for F
where
    F: Fn(&str, &str, &str, &str) -> Result<String, HandlerError> + Send + Sync,
{
    fn handle_request(
        &self,
        method: &str,
        url: &str,
        headers_json: &str,
        body: &str,
    ) -> Result<String, HandlerError> {
        self(method, url, headers_json, body)
    }
}
