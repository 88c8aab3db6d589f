//! Dispatch pipeline from flattened request to decoded result.
//!
//! [`HandlerRunner`] drives one call through the embedded handler:
//!
//! 1. Encode the header pairs as JSON
//! 2. Invoke the handler with the flat tuple
//! 3. Decode the handler's result document

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument};

use edge_bridge_common::BridgeError;

use crate::call::HandlerCall;
use crate::handler::RequestHandler;
use crate::result::HandlerResult;

/// Drives calls through the embedded handler.
///
/// # Thread Safety
///
/// `HandlerRunner` is thread-safe and shared across request tasks; it holds
/// no per-call state.
pub struct HandlerRunner {
    handler: Arc<dyn RequestHandler>,
}

impl HandlerRunner {
    /// Create a new runner around an embedded handler.
    pub fn new(handler: Arc<dyn RequestHandler>) -> Self {
        Self { handler }
    }

    /// Invoke the handler with the flattened request and decode its result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The header sequence cannot be encoded
    /// - The handler raises a failure
    /// - The handler's return value is not a valid result document
    #[instrument(skip(self, call), fields(method = %call.method, url = %call.url))]
    pub fn dispatch(&self, call: &HandlerCall) -> Result<HandlerResult, BridgeError> {
        let start = Instant::now();

        let headers_json = call.headers_json()?;

        debug!(
            header_count = call.headers.len(),
            body_bytes = call.body.len(),
            "Invoking handler"
        );

        let raw = self
            .handler
            .handle_request(&call.method, &call.url, &headers_json, &call.body)?;

        let result = HandlerResult::parse(&raw)?;

        info!(
            duration_ms = start.elapsed().as_millis(),
            status = result.status,
            "Handler dispatch completed"
        );

        Ok(result)
    }
}

impl std::fmt::Debug for HandlerRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRunner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use edge_bridge_common::HandlerError;

    use super::*;

    fn echo_runner() -> HandlerRunner {
        HandlerRunner::new(Arc::new(
            |method: &str, url: &str, headers_json: &str, body: &str| {
                let result = serde_json::json!({
                    "status": 200,
                    "body": format!("{method} {url} {headers_json} {body}"),
                });
                Ok(result.to_string())
            },
        ))
    }

    #[test]
    fn test_dispatch_forwards_the_flat_tuple() {
        let runner = echo_runner();

        let mut call = HandlerCall::new("POST", "http://example.com/echo");
        call.headers.push(("x-a".to_string(), "1".to_string()));
        call.body = "hello".to_string();

        let result = runner.dispatch(&call).unwrap();
        assert_eq!(result.status, 200);
        assert_eq!(
            result.body,
            r#"POST http://example.com/echo [["x-a","1"]] hello"#
        );
    }

    #[test]
    fn test_dispatch_propagates_handler_failure() {
        let runner = HandlerRunner::new(Arc::new(|_: &str, _: &str, _: &str, _: &str| {
            Err(HandlerError::new("boom"))
        }));

        let err = runner
            .dispatch(&HandlerCall::new("GET", "http://example.com/"))
            .unwrap_err();
        assert!(err.is_handler_failure());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_dispatch_rejects_malformed_result() {
        let runner = HandlerRunner::new(Arc::new(|_: &str, _: &str, _: &str, _: &str| {
            Ok("not a result document".to_string())
        }));

        let err = runner
            .dispatch(&HandlerCall::new("GET", "http://example.com/"))
            .unwrap_err();
        assert!(err.is_result_decode());
    }
}
