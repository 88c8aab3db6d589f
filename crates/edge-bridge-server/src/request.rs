//! Inbound request extraction.
//!
//! This module flattens an incoming HTTP request into a [`HandlerCall`]
//! for the embedded handler.

use axum::body::Body;
use axum::http::request::Parts;
use axum::http::{Method, Request, header};

use edge_bridge_common::{BridgeConfig, BridgeError};
use edge_bridge_core::HandlerCall;

/// Methods whose payload is ignored: the forwarded body is always empty.
fn is_bodyless(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD)
}

/// Flatten an inbound request into a handler call.
///
/// The body is read fully into memory for non-GET/HEAD methods; this is the
/// bridge's single suspension point. Header pairs keep the header map's
/// iteration order, duplicates included, with values decoded lossily so the
/// pair count is preserved.
///
/// # Errors
///
/// Returns [`BridgeError::BodyRead`] if the payload cannot be fully read.
pub async fn extract_call(
    config: &BridgeConfig,
    req: Request<Body>,
) -> Result<HandlerCall, BridgeError> {
    let (parts, body) = req.into_parts();

    let method = parts.method.to_string();
    let url = absolute_url(config, &parts);

    let headers: Vec<(String, String)> = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let body = if is_bodyless(&parts.method) {
        String::new()
    } else {
        let bytes = axum::body::to_bytes(body, usize::MAX)
            .await
            .map_err(|e| BridgeError::body_read(e.to_string()))?;
        String::from_utf8_lossy(&bytes).into_owned()
    };

    Ok(HandlerCall {
        method,
        url,
        headers,
        body,
    })
}

/// Reconstruct the absolute request URL.
///
/// Origin-form targets are combined with the configured scheme and the
/// `Host` header; absolute-form targets pass through untouched.
fn absolute_url(config: &BridgeConfig, parts: &Parts) -> String {
    let uri = &parts.uri;
    if uri.scheme().is_some() {
        return uri.to_string();
    }

    let host = parts
        .headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());

    format!("{}://{host}{path_and_query}", config.url_scheme)
}
