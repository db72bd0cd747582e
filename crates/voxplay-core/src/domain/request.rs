//! Synthesis request domain type.

use serde::{Deserialize, Serialize};

use crate::error::SpeechError;

/// Text to synthesize plus per-request options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Text to speak. Must contain at least one non-whitespace character.
    #[serde(default)]
    pub text: String,
    /// Engine-specific voice/speaker identifier.
    #[serde(default)]
    pub voice: Option<String>,
    /// Play server-side and return only a status object.
    #[serde(default)]
    pub play_only: bool,
}

impl SynthesisRequest {
    /// Create a request for `text` with no voice and `play_only = false`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: None,
            play_only: false,
        }
    }

    /// Select a voice.
    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Request server-side playback instead of the audio body.
    #[must_use]
    pub const fn play_only(mut self) -> Self {
        self.play_only = true;
        self
    }

    /// The voice, with blank strings treated as "no voice".
    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Reject requests that must never reach an engine.
    pub fn validate(&self) -> Result<(), SpeechError> {
        if self.text.trim().is_empty() {
            return Err(SpeechError::InvalidRequest("missing text".to_string()));
        }
        Ok(())
    }
}
