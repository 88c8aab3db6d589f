//! Outbound response construction.
//!
//! This module turns a handler result (or a bridge failure) into the HTTP
//! response shape the bridge always answers with.

use axum::body::Body;
use axum::http::{Response, StatusCode, header};

/// Content type carried on every bridge response.
const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Flat response produced by the bridge.
#[derive(Debug, Clone)]
pub struct BridgeHttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl BridgeHttpResponse {
    /// Create a response from a status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Uniform failure shape: status 500 with `{"error": message}`.
    pub fn error(message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self::new(500, body)
    }

    /// Convert to an axum response.
    ///
    /// The response carries exactly one header,
    /// `Content-Type: application/json; charset=utf-8`. An out-of-range
    /// status code falls back to 500.
    pub fn into_axum_response(self) -> Response<Body> {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(Body::from(self.body))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal server error"))
                    .unwrap()
            })
    }
}
