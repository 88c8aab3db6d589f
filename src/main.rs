//! Edge Bridge CLI entry point.
//!
//! Runs the HTTP bridge in front of the built-in reference handler. Real
//! deployments embed `edge-bridge-server` as a library and inject their own
//! handler; this binary demonstrates the wire contract end to end.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edge_bridge_common::{ConfigFile, HandlerError};
use edge_bridge_server::{BridgeServer, ServerConfig};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "edge-bridge",
    about = "HTTP bridge in front of an embedded request handler"
)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long, env = "BRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address override (host:port).
    #[arg(long, env = "BIND_ADDR")]
    bind_addr: Option<String>,
}

/// Reference handler: answers every call with a JSON echo of the request
/// line, demonstrating the result contract.
fn reference_handler(
    method: &str,
    url: &str,
    headers_json: &str,
    body: &str,
) -> Result<String, HandlerError> {
    let headers: serde_json::Value =
        serde_json::from_str(headers_json).map_err(|e| HandlerError::new(e.to_string()))?;

    let body_doc = serde_json::json!({
        "message": "edge-bridge reference handler",
        "method": method,
        "url": url,
        "header_count": headers.as_array().map_or(0, Vec::len),
        "body_bytes": body.len(),
    });

    let result = serde_json::json!({
        "status": 200,
        "body": body_doc.to_string(),
    });

    Ok(result.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,edge_bridge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting Edge Bridge");

    let config_file = match &args.config {
        Some(path) => ConfigFile::from_file(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => ConfigFile::default(),
    };

    let bind_addr: SocketAddr = args
        .bind_addr
        .as_deref()
        .unwrap_or(&config_file.server.bind_addr)
        .parse()
        .context("Invalid bind address. Expected format: 'host:port' (e.g., '0.0.0.0:8080')")?;

    let mut server_config = ServerConfig::default()
        .with_bind_addr(bind_addr)
        .with_timeout(config_file.server.request_timeout_secs);
    server_config.graceful_shutdown = config_file.server.graceful_shutdown;

    info!(bind_addr = %bind_addr, "Configuration loaded");

    let server = BridgeServer::new(
        config_file.bridge,
        server_config,
        Arc::new(reference_handler),
    );

    info!("Bridge initialized; every method and path is forwarded to the handler");

    server.run().await?;

    Ok(())
}
