//! Integration tests for edge-bridge-server.
//!
//! These tests verify the complete bridge pipeline over a real socket:
//! - Request flattening (method, url, headers, body)
//! - Handler dispatch and result decoding
//! - Body renormalization
//! - The uniform 500 error path

use std::sync::{Arc, Mutex};

use edge_bridge_common::{BridgeConfig, HandlerError};
use edge_bridge_core::RequestHandler;
use edge_bridge_server::BridgeServer;
use edge_bridge_server::server::TestHandle;

/// The flat tuple a handler received, captured for assertions.
#[derive(Debug, Clone)]
struct SeenCall {
    method: String,
    url: String,
    headers_json: String,
    body: String,
}

/// A handler that records its arguments and returns a fixed result.
fn recording_handler(result: &'static str) -> (Arc<Mutex<Option<SeenCall>>>, Arc<dyn RequestHandler>) {
    let seen = Arc::new(Mutex::new(None));
    let sink = seen.clone();

    let handler: Arc<dyn RequestHandler> = Arc::new(
        move |method: &str, url: &str, headers_json: &str, body: &str| {
            *sink.lock().unwrap() = Some(SeenCall {
                method: method.to_string(),
                url: url.to_string(),
                headers_json: headers_json.to_string(),
                body: body.to_string(),
            });
            Ok(result.to_string())
        },
    );

    (seen, handler)
}

async fn start(handler: Arc<dyn RequestHandler>) -> TestHandle {
    BridgeServer::start_test(BridgeConfig::default(), handler)
        .await
        .expect("test server should bind")
}

// ============================================================================
// Test: GET forwards an empty body and the standard content type
// ============================================================================

#[tokio::test]
async fn test_get_request_round_trip() {
    let (seen, handler) = recording_handler(r#"{"status":200,"body":"{\"ok\":true}"}"#);
    let server = start(handler).await;

    let response = reqwest::get(format!("{}/status", server.url()))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .unwrap(),
        "application/json; charset=utf-8"
    );
    assert_eq!(response.text().await.unwrap(), r#"{"ok":true}"#);

    let call = seen.lock().unwrap().clone().unwrap();
    assert_eq!(call.method, "GET");
    assert!(call.url.ends_with("/status"));
    assert_eq!(call.body, "");

    server.shutdown().await;
}

// ============================================================================
// Test: POST forwards the payload and custom headers
// ============================================================================

#[tokio::test]
async fn test_post_request_forwards_body_and_headers() {
    let (seen, handler) = recording_handler(r#"{"status":201,"body":"created"}"#);
    let server = start(handler).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/echo", server.url()))
        .header("x-a", "1")
        .body("hello")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    assert_eq!(response.text().await.unwrap(), "created");

    let call = seen.lock().unwrap().clone().unwrap();
    assert_eq!(call.method, "POST");
    assert!(call.url.ends_with("/echo"));
    assert_eq!(call.body, "hello");
    assert!(call.headers_json.contains(r#"["x-a","1"]"#));

    server.shutdown().await;
}

// ============================================================================
// Test: non-JSON result bodies pass through unchanged
// ============================================================================

#[tokio::test]
async fn test_non_json_result_body_passes_through() {
    let (_seen, handler) = recording_handler(r#"{"status":200,"body":"not json"}"#);
    let server = start(handler).await;

    let response = reqwest::get(server.url()).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "not json");

    server.shutdown().await;
}

// ============================================================================
// Test: JSON result bodies are renormalized
// ============================================================================

#[tokio::test]
async fn test_json_result_body_is_renormalized() {
    let (_seen, handler) =
        recording_handler(r#"{"status":200,"body":"{ \"ok\" :  true }"}"#);
    let server = start(handler).await;

    let response = reqwest::get(server.url()).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"ok":true}"#);

    server.shutdown().await;
}

// ============================================================================
// Test: handler failures become a 500 with a JSON error body
// ============================================================================

#[tokio::test]
async fn test_handler_failure_returns_500() {
    let handler: Arc<dyn RequestHandler> = Arc::new(|_: &str, _: &str, _: &str, _: &str| {
        Err(HandlerError::new("boom"))
    });
    let server = start(handler).await;

    let response = reqwest::get(server.url()).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .unwrap(),
        "application/json; charset=utf-8"
    );
    assert_eq!(response.text().await.unwrap(), r#"{"error":"boom"}"#);

    server.shutdown().await;
}

// ============================================================================
// Test: malformed handler results become a 500 with a JSON error body
// ============================================================================

#[tokio::test]
async fn test_malformed_result_returns_500() {
    let (_seen, handler) = recording_handler("definitely not a result document");
    let server = start(handler).await;

    let response = reqwest::get(server.url()).await.unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value =
        serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert!(body.get("error").is_some());

    server.shutdown().await;
}
