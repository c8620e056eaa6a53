//! Liveness HTTP endpoint
//!
//! Hosting platforms and uptime monitors poll `GET /` to keep the process
//! awake; the reply is a static 200 and never consults the gateway.

use anyhow::{anyhow, Result};
use axum::{response::Json, routing::get, Router};
use log::info;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(health_check))
        .layer(CorsLayer::permissive())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Bot is online!",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Bind and serve the liveness endpoint until the process exits.
pub async fn start_liveness_server(port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| anyhow!("Failed to bind to port {port}: {e}"))?;

    info!("Web server listening on port {port}");

    axum::serve(listener, create_router())
        .await
        .map_err(|e| anyhow!("HTTP server error: {e}"))?;

    Ok(())
}
