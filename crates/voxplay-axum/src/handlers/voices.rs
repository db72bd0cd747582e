//! Voice listing.

use axum::Json;
use axum::extract::State;

use crate::dto::VoicesResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// `GET /api/voices`
pub async fn list(State(state): State<AppState>) -> Result<Json<VoicesResponse>, HttpError> {
    let voices = state.gateway.voices().await?;
    Ok(Json(VoicesResponse { voices }))
}
