//! Synthesis gateway - validates requests and maps engine failures.
//!
//! The gateway owns the engine slot. The slot starts out `Initializing` and
//! is filled once by the composition root (or marked `Failed`); until then
//! every synthesis call reports [`SpeechError::EngineUnavailable`].

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::{AudioArtifact, SynthesisRequest};
use crate::error::SpeechError;
use crate::ports::{EngineError, SpeechEngine};

/// Lifecycle of the engine slot.
#[derive(Clone)]
pub enum EngineState {
    /// Startup has not finished loading the engine.
    Initializing,
    /// Engine loaded and serving requests.
    Ready(Arc<dyn SpeechEngine>),
    /// Engine failed to load; requests are refused with this reason.
    Failed(String),
}

impl EngineState {
    /// Label used in health output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Debug for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => f.write_str("Initializing"),
            Self::Ready(engine) => f.debug_tuple("Ready").field(&engine.name()).finish(),
            Self::Failed(reason) => f.debug_tuple("Failed").field(reason).finish(),
        }
    }
}

/// Front door to the speech engine.
pub struct SynthesisGateway {
    engine: RwLock<EngineState>,
    voice_override: Option<Vec<String>>,
}

impl Default for SynthesisGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthesisGateway {
    /// Create a gateway whose engine is still initializing.
    pub fn new() -> Self {
        Self {
            engine: RwLock::new(EngineState::Initializing),
            voice_override: None,
        }
    }

    /// Create a gateway with an engine already loaded.
    pub fn with_engine(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine: RwLock::new(EngineState::Ready(engine)),
            voice_override: None,
        }
    }

    /// Advertise an operator-supplied voice list instead of asking the engine.
    #[must_use]
    pub fn with_voice_override(mut self, voices: Vec<String>) -> Self {
        self.voice_override = Some(voices);
        self
    }

    /// Install the loaded engine.
    pub async fn install(&self, engine: Arc<dyn SpeechEngine>) {
        *self.engine.write().await = EngineState::Ready(engine);
    }

    /// Record that the engine could not be loaded.
    pub async fn mark_failed(&self, reason: impl Into<String>) {
        *self.engine.write().await = EngineState::Failed(reason.into());
    }

    /// Current engine slot state.
    pub async fn state(&self) -> EngineState {
        self.engine.read().await.clone()
    }

    /// Whether synthesis requests can currently be served.
    pub async fn is_ready(&self) -> bool {
        matches!(*self.engine.read().await, EngineState::Ready(_))
    }

    async fn engine(&self) -> Result<Arc<dyn SpeechEngine>, SpeechError> {
        match &*self.engine.read().await {
            EngineState::Ready(engine) => Ok(Arc::clone(engine)),
            EngineState::Initializing => Err(SpeechError::EngineUnavailable(
                "TTS model not loaded yet".to_string(),
            )),
            EngineState::Failed(reason) => Err(SpeechError::EngineUnavailable(format!(
                "TTS model failed to load: {reason}"
            ))),
        }
    }

    /// Turn a request into an audio artifact.
    ///
    /// Validation happens before the engine is consulted, so an empty text
    /// is an `InvalidRequest` even while the engine is unavailable.
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact, SpeechError> {
        request.validate()?;
        let engine = self.engine().await?;

        if let Some(voice) = request.voice() {
            if !engine.supports_voice_selection() {
                return Err(SpeechError::UnsupportedVoice(format!(
                    "engine does not support voice selection (requested '{voice}')"
                )));
            }
        }

        debug!(chars = request.text.len(), voice = ?request.voice(), "Synthesizing");
        engine.synthesize(request).await.map_err(|e| match e {
            EngineError::UnknownVoice(voice) => {
                SpeechError::UnsupportedVoice(format!("unknown voice '{voice}'"))
            }
            EngineError::NotReady(msg) => SpeechError::EngineUnavailable(msg),
            EngineError::Failed(msg) => SpeechError::SynthesisFailed(msg),
        })
    }

    /// Voices to advertise to clients.
    ///
    /// Best effort: introspection failures yield an empty list.
    pub async fn voices(&self) -> Result<Vec<String>, SpeechError> {
        let engine = self.engine().await?;

        if let Some(voices) = &self.voice_override {
            return Ok(voices.clone());
        }

        match engine.voices().await {
            Ok(voices) => Ok(voices),
            Err(e) => {
                warn!(error = %e, "Voice introspection failed; advertising none");
                Ok(Vec::new())
            }
        }
    }
}
