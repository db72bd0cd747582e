//! Axum-specific error types and mappings.
//!
//! Maps `SpeechError` onto HTTP status codes and a JSON body carrying a
//! stable `type` discriminant.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use voxplay_core::SpeechError;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Malformed request body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Error raised by synthesis or playback.
    #[error(transparent)]
    Speech(#[from] SpeechError),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl HttpError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Speech(err) => speech_status(err),
        }
    }

    const fn error_type(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "INVALID_REQUEST",
            Self::Speech(err) => err.kind(),
        }
    }
}

const fn speech_status(err: &SpeechError) -> StatusCode {
    match err {
        SpeechError::InvalidRequest(_) | SpeechError::UnsupportedVoice(_) => {
            StatusCode::BAD_REQUEST
        }
        SpeechError::EngineUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        SpeechError::SynthesisFailed(_)
        | SpeechError::NoPlaybackBackend { .. }
        | SpeechError::PlaybackSpawnFailed { .. }
        | SpeechError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
            status: status.as_u16(),
            error_type: self.error_type(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<voxplay_voice::WavError> for HttpError {
    fn from(err: voxplay_voice::WavError) -> Self {
        Self::Speech(err.into())
    }
}
