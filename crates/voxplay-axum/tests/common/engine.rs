//! Scripted speech engine for router tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use voxplay_core::{AudioArtifact, EngineError, PcmAudio, SpeechEngine, SynthesisRequest};

/// What the fake engine produces.
#[derive(Debug, Clone)]
pub enum Output {
    Pcm { sample_rate: Option<u32> },
    File(PathBuf),
    Fail(String),
}

#[derive(Debug)]
pub struct FakeEngine {
    output: Output,
    voices: Vec<String>,
    calls: AtomicUsize,
}

impl FakeEngine {
    pub fn pcm(sample_rate: Option<u32>) -> Self {
        Self::new(Output::Pcm { sample_rate })
    }

    pub fn new(output: Output) -> Self {
        Self {
            output,
            voices: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Accept exactly these voices.
    pub fn with_voices(mut self, voices: &[&str]) -> Self {
        self.voices = voices.iter().map(ToString::to_string).collect();
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechEngine for FakeEngine {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn supports_voice_selection(&self) -> bool {
        !self.voices.is_empty()
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(voice) = request.voice() {
            if !self.voices.iter().any(|v| v == voice) {
                return Err(EngineError::UnknownVoice(voice.to_string()));
            }
        }
        match &self.output {
            Output::Pcm { sample_rate } => Ok(AudioArtifact::Pcm(PcmAudio {
                samples: vec![0.0, 0.1, -0.1, 0.0].repeat(64),
                sample_rate: *sample_rate,
            })),
            Output::File(path) => Ok(AudioArtifact::File(path.clone())),
            Output::Fail(message) => Err(EngineError::Failed(message.clone())),
        }
    }

    async fn voices(&self) -> Result<Vec<String>, EngineError> {
        Ok(self.voices.clone())
    }
}
