//! Playback status and cancellation.

use axum::Json;
use axum::extract::State;
use voxplay_core::PlaybackStatus;

use crate::dto::CancelResponse;
use crate::state::AppState;

/// `GET /api/playing`
pub async fn playing(State(state): State<AppState>) -> Json<PlaybackStatus> {
    Json(state.registry.status().await)
}

/// `POST /api/tts/cancel`
pub async fn cancel(State(state): State<AppState>) -> Json<CancelResponse> {
    let canceled = state.registry.cancel_all().await;
    Json(CancelResponse { ok: true, canceled })
}
