//! Piper TTS backend: implements [`SpeechEngine`] by running the `piper` CLI.
//!
//! Text is written to piper's stdin and raw 16-bit mono PCM is read back
//! from stdout (`--output-raw`). The sample rate and the speaker table come
//! from the model's JSON sidecar (`<model>.onnx.json`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info};
use voxplay_core::{AudioArtifact, EngineError, PcmAudio, SpeechEngine, SynthesisRequest};

use super::util::{failure_message, resolve_binary, run_with_stdin};

/// Configuration for the piper backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiperConfig {
    /// `piper` executable (bare name or path).
    pub binary: PathBuf,
    /// Voice model (`.onnx`).
    pub model: PathBuf,
    /// Model sidecar; defaults to `<model>.json`.
    pub model_config: Option<PathBuf>,
}

impl PiperConfig {
    /// Configuration using `piper` from `PATH`.
    pub fn new(model: impl Into<PathBuf>) -> Self {
        Self {
            binary: PathBuf::from("piper"),
            model: model.into(),
            model_config: None,
        }
    }

    fn sidecar_path(&self) -> PathBuf {
        self.model_config.clone().unwrap_or_else(|| {
            let mut name = self.model.clone().into_os_string();
            name.push(".json");
            PathBuf::from(name)
        })
    }
}

/// Subset of the piper model sidecar that voxplay needs.
#[derive(Debug, Default, Deserialize)]
struct ModelSidecar {
    #[serde(default)]
    audio: AudioSection,
    #[serde(default)]
    speaker_id_map: BTreeMap<String, i64>,
}

#[derive(Debug, Default, Deserialize)]
struct AudioSection {
    sample_rate: Option<u32>,
}

/// Piper engine bound to one voice model.
#[derive(Debug)]
pub struct PiperEngine {
    binary: PathBuf,
    model: PathBuf,
    sample_rate: Option<u32>,
    speakers: BTreeMap<String, i64>,
}

impl PiperEngine {
    /// Check the binary and model, and read the sidecar.
    ///
    /// A missing sidecar is tolerated: the engine then reports no sample rate
    /// and supports no speaker selection.
    pub async fn load(config: &PiperConfig) -> Result<Self, EngineError> {
        let binary = resolve_binary(&config.binary)?;
        if !tokio::fs::try_exists(&config.model).await.unwrap_or(false) {
            return Err(EngineError::NotReady(format!(
                "piper model not found: {}",
                config.model.display()
            )));
        }

        let sidecar_path = config.sidecar_path();
        let sidecar = match tokio::fs::read(&sidecar_path).await {
            Ok(bytes) => serde_json::from_slice::<ModelSidecar>(&bytes).map_err(|e| {
                EngineError::NotReady(format!(
                    "invalid piper model config {}: {e}",
                    sidecar_path.display()
                ))
            })?,
            Err(e) => {
                debug!(path = %sidecar_path.display(), error = %e, "No piper model sidecar");
                ModelSidecar::default()
            }
        };

        info!(
            binary = %binary.display(),
            model = %config.model.display(),
            sample_rate = ?sidecar.audio.sample_rate,
            speakers = sidecar.speaker_id_map.len(),
            "Loaded piper engine"
        );

        Ok(Self {
            binary,
            model: config.model.clone(),
            sample_rate: sidecar.audio.sample_rate,
            speakers: sidecar.speaker_id_map,
        })
    }

    /// Model this engine speaks with.
    pub fn model(&self) -> &Path {
        &self.model
    }

    fn speaker_id(&self, voice: &str) -> Result<i64, EngineError> {
        self.speakers
            .get(voice)
            .copied()
            .or_else(|| {
                voice
                    .parse::<i64>()
                    .ok()
                    .filter(|id| self.speakers.values().any(|v| v == id))
            })
            .ok_or_else(|| EngineError::UnknownVoice(voice.to_string()))
    }
}

/// Decode little-endian signed 16-bit PCM. A trailing odd byte is dropped.
fn decode_s16le(raw: &[u8]) -> Vec<f32> {
    raw.chunks_exact(2)
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / 32_768.0)
        .collect()
}

#[async_trait]
impl SpeechEngine for PiperEngine {
    fn name(&self) -> &'static str {
        "piper"
    }

    fn supports_voice_selection(&self) -> bool {
        !self.speakers.is_empty()
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact, EngineError> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("--model").arg(&self.model).arg("--output-raw");
        if let Some(voice) = request.voice() {
            cmd.arg("--speaker").arg(self.speaker_id(voice)?.to_string());
        }

        // piper synthesizes one utterance per input line
        let input = format!("{}\n", request.text.trim());
        let output = run_with_stdin(cmd, input).await?;
        if !output.status.success() {
            return Err(EngineError::Failed(failure_message("piper", &output)));
        }
        if output.stdout.is_empty() {
            return Err(EngineError::Failed("piper produced no audio".to_string()));
        }

        let samples = decode_s16le(&output.stdout);
        Ok(AudioArtifact::Pcm(PcmAudio {
            samples,
            sample_rate: self.sample_rate,
        }))
    }

    async fn voices(&self) -> Result<Vec<String>, EngineError> {
        Ok(self.speakers.keys().cloned().collect())
    }
}
