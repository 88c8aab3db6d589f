//! The fetch-event entry point.
//!
//! One handler serves every method and path:
//!
//! 1. Flatten the request into a handler call
//! 2. Dispatch through the embedded handler
//! 3. Renormalize the result body when it is valid JSON
//! 4. Answer with the handler's status and the standard content type

use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::IntoResponse;
use tracing::{error, info};
use uuid::Uuid;

use edge_bridge_common::BridgeError;
use edge_bridge_core::renormalize_json;

use crate::request::extract_call;
use crate::response::BridgeHttpResponse;
use crate::state::AppState;

/// Bridge one HTTP request to the embedded handler.
///
/// Every failure short of body renormalization collapses into a 500
/// response with `{"error": ...}`; the caller always receives a well-formed
/// reply.
pub async fn handle_request(
    State(state): State<AppState>,
    req: Request<Body>,
) -> impl IntoResponse {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %req.method(),
        uri = %req.uri(),
        "Handling request"
    );

    let call = match extract_call(state.config(), req).await {
        Ok(call) => call,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Failed to read request");
            return error_to_response(&e).into_axum_response();
        }
    };

    match state.runner().dispatch(&call) {
        Ok(result) => {
            let body = renormalize_json(&result.body);

            info!(
                request_id = %request_id,
                duration_ms = start.elapsed().as_millis(),
                status = result.status,
                "Request completed"
            );

            BridgeHttpResponse::new(result.status, body).into_axum_response()
        }
        Err(e) => {
            error!(
                request_id = %request_id,
                duration_ms = start.elapsed().as_millis(),
                error = %e,
                "Request failed"
            );
            error_to_response(&e).into_axum_response()
        }
    }
}

/// Convert a bridge failure to the uniform HTTP error shape.
fn error_to_response(error: &BridgeError) -> BridgeHttpResponse {
    BridgeHttpResponse::error(&error.to_string())
}
