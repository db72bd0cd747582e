//! eSpeak NG backend.
//!
//! Runs `espeak-ng -w <file> --stdin` and hands the resulting WAV file back
//! as a file artifact.

use std::collections::BTreeSet;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};
use voxplay_core::{AudioArtifact, EngineError, SpeechEngine, SynthesisRequest};

use super::util::{failure_message, resolve_binary, run_with_stdin};

/// Configuration for the espeak-ng backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EspeakConfig {
    /// `espeak-ng` executable (bare name or path).
    pub binary: PathBuf,
    /// Voice used when a request names none.
    pub default_voice: Option<String>,
}

impl Default for EspeakConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("espeak-ng"),
            default_voice: None,
        }
    }
}

#[derive(Debug)]
pub struct EspeakEngine {
    binary: PathBuf,
    default_voice: Option<String>,
}

impl EspeakEngine {
    pub fn load(config: &EspeakConfig) -> Result<Self, EngineError> {
        let binary = resolve_binary(&config.binary)?;
        info!(binary = %binary.display(), default_voice = ?config.default_voice, "Loaded espeak-ng engine");
        Ok(Self {
            binary,
            default_voice: config.default_voice.clone(),
        })
    }

    fn output_path() -> Result<PathBuf, EngineError> {
        let temp = tempfile::Builder::new()
            .prefix("voxplay-espeak-")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| EngineError::Failed(format!("cannot create output file: {e}")))?;
        let (_, path) = temp
            .keep()
            .map_err(|e| EngineError::Failed(format!("cannot keep output file: {}", e.error)))?;
        Ok(path)
    }
}

/// Voice names from `espeak-ng --voices` output.
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  af              --/M      Afrikaans          gmw/af
/// ```
fn parse_voice_list(listing: &str) -> Vec<String> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(ToString::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn mentions_voice(message: &str) -> bool {
    message.to_ascii_lowercase().contains("voice")
}

#[async_trait]
impl SpeechEngine for EspeakEngine {
    fn name(&self) -> &'static str {
        "espeak-ng"
    }

    fn supports_voice_selection(&self) -> bool {
        true
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact, EngineError> {
        let path = Self::output_path()?;
        let voice = request.voice().or(self.default_voice.as_deref());

        let mut cmd = Command::new(&self.binary);
        cmd.arg("-w").arg(&path);
        if let Some(voice) = voice {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg("--stdin");

        let output = run_with_stdin(cmd, request.text.trim().to_string()).await?;
        if !output.status.success() {
            let _ = tokio::fs::remove_file(&path).await;
            let message = failure_message("espeak-ng", &output);
            return Err(match voice {
                Some(voice) if mentions_voice(&message) => {
                    EngineError::UnknownVoice(voice.to_string())
                }
                _ => EngineError::Failed(message),
            });
        }

        debug!(path = %path.display(), "espeak-ng wrote artifact");
        Ok(AudioArtifact::File(path))
    }

    async fn voices(&self) -> Result<Vec<String>, EngineError> {
        let output = Command::new(&self.binary)
            .arg("--voices")
            .output()
            .await
            .map_err(|e| EngineError::Failed(format!("failed to list voices: {e}")))?;
        if !output.status.success() {
            return Err(EngineError::Failed(failure_message("espeak-ng", &output)));
        }
        Ok(parse_voice_list(&String::from_utf8_lossy(&output.stdout)))
    }
}
