//! Error taxonomy for synthesis and playback.
//!
//! Every adapter maps `SpeechError` onto its own surface (HTTP status codes,
//! CLI exit codes). Variants are deliberately coarse: each one corresponds to
//! a distinct caller reaction.

use thiserror::Error;

/// Errors produced by the synthesis gateway and the playback launcher.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpeechError {
    /// Malformed or missing input (e.g. empty text).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A voice was requested that the engine cannot honor.
    ///
    /// Client error: retrying without the voice parameter may succeed.
    #[error("Unsupported voice: {0}")]
    UnsupportedVoice(String),

    /// The engine is not initialized yet, or failed to initialize.
    #[error("TTS engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The engine failed while synthesizing. Carries the engine message verbatim.
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// None of the configured player backends is present on this host.
    #[error("No playback backend available (tried: {})", tried.join(", "))]
    NoPlaybackBackend { tried: Vec<String> },

    /// A player backend was found but the process could not be spawned.
    #[error("Failed to spawn {backend}: {message}")]
    PlaybackSpawnFailed { backend: String, message: String },

    /// Unexpected condition (artifact I/O, encoding).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SpeechError {
    /// Stable discriminant for clients that branch on the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::UnsupportedVoice(_) => "UNSUPPORTED_VOICE",
            Self::EngineUnavailable(_) => "ENGINE_UNAVAILABLE",
            Self::SynthesisFailed(_) => "SYNTHESIS_FAILED",
            Self::NoPlaybackBackend { .. } => "NO_PLAYBACK_BACKEND",
            Self::PlaybackSpawnFailed { .. } => "PLAYBACK_SPAWN_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Whether the caller can fix the problem by changing the request.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::UnsupportedVoice(_))
    }
}
