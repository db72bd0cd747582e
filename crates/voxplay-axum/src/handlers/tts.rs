//! Synthesis endpoints.
//!
//! `POST /api/tts` returns a WAV body, or starts server-side playback when
//! `play_only` is set. `POST /api/tts/play` always plays server-side.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};
use voxplay_core::{AudioArtifact, SynthesisRequest};
use voxplay_voice::{RenderedWav, materialize, render_wav};

use crate::bootstrap::AxumContext;
use crate::dto::PlayedResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Response header carrying the WAV sample rate.
pub const SAMPLE_RATE_HEADER: &str = "x-sample-rate";

/// `POST /api/tts`
pub async fn synthesize(
    State(state): State<AppState>,
    payload: Result<Json<SynthesisRequest>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(request) = payload?;
    debug!(
        chars = request.text.len(),
        voice = ?request.voice(),
        play_only = request.play_only,
        "Synthesis requested"
    );

    let artifact = state.gateway.synthesize(&request).await?;
    if request.play_only {
        start_playback(&state, &artifact).await?;
        return Ok(Json(PlayedResponse::played()).into_response());
    }

    let wav = render_wav(&artifact).await?;
    if state.autoplay {
        spawn_autoplay(Arc::clone(&state), artifact);
    }
    Ok(wav_response(wav))
}

/// `POST /api/tts/play`
pub async fn play(
    State(state): State<AppState>,
    payload: Result<Json<SynthesisRequest>, JsonRejection>,
) -> Result<Json<PlayedResponse>, HttpError> {
    let Json(request) = payload?;
    let artifact = state.gateway.synthesize(&request).await?;
    start_playback(&state, &artifact).await?;
    Ok(Json(PlayedResponse::played()))
}

/// Write the artifact to disk if needed, spawn a player and track it.
async fn start_playback(ctx: &AxumContext, artifact: &AudioArtifact) -> Result<(), HttpError> {
    let path = materialize(artifact).await?;
    let handle = ctx.launcher.play(&path)?;
    ctx.registry.record(handle).await;
    Ok(())
}

fn spawn_autoplay(state: AppState, artifact: AudioArtifact) {
    tokio::spawn(async move {
        if let Err(e) = start_playback(&state, &artifact).await {
            warn!(error = %e, "Autoplay failed");
        }
    });
}

fn wav_response(wav: RenderedWav) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("audio/wav"));
    headers.insert(SAMPLE_RATE_HEADER, HeaderValue::from(wav.sample_rate));
    if wav.from_file {
        headers.insert(
            CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"speech.wav\""),
        );
    }
    (headers, wav.bytes).into_response()
}
