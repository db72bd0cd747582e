//! Liveness endpoints.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::dto::OkResponse;
use crate::state::AppState;

/// `GET /ping`, `GET /api/ping`
pub async fn ping() -> Json<OkResponse> {
    Json(OkResponse::ok())
}

/// `GET /health`
///
/// Always 200 while the process is up; `engine` tells whether synthesis
/// is available yet.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let engine = state.gateway.state().await;
    Json(json!({
        "ok": true,
        "engine": engine.label(),
    }))
}
