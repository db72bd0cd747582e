//! Speech engine port: the external text-to-speech collaborator.
//!
//! An engine is opaque: it turns text (and optionally a voice id) into an
//! [`AudioArtifact`]. Implementations live in `voxplay-voice`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AudioArtifact, SynthesisRequest};

/// Failures reported by an engine implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The engine does not know the requested voice.
    #[error("Unknown voice: {0}")]
    UnknownVoice(String),

    /// The engine cannot serve requests (missing binary, missing model).
    #[error("Engine not ready: {0}")]
    NotReady(String),

    /// Anything else the engine raised while synthesizing.
    #[error("{0}")]
    Failed(String),
}

/// Port trait for a text-to-speech engine.
///
/// Engines are shared across concurrent requests. An engine that is not
/// reentrant must serialize calls internally.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Short engine name for logs and health output (e.g. `"piper"`).
    fn name(&self) -> &'static str;

    /// Whether `synthesize` honors a per-call voice.
    fn supports_voice_selection(&self) -> bool;

    /// Synthesize `request.text`, using `request.voice()` when supported.
    ///
    /// Callers validate the request first; engines may assume non-empty text.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact, EngineError>;

    /// Voices the engine advertises. May be empty.
    async fn voices(&self) -> Result<Vec<String>, EngineError>;
}
