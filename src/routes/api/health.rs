use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::Ctx;

/// Liveness probe
/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn mount() -> Router<Ctx> {
    Router::new().route("/health", get(health))
}
