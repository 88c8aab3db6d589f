//! HTTP router configuration.
//!
//! The bridge reserves no paths: a fallback handler serves every method and
//! path, and routing, if any, happens inside the embedded handler.

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handler::handle_request;
use crate::state::AppState;

/// Build the application router.
///
/// Every request reaches [`handle_request`]. The timeout layer is host
/// policy; the bridge itself implements none.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .fallback(handle_request)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
