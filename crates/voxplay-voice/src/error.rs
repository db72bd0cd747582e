//! Audio encoding error types.

use std::path::PathBuf;

use voxplay_core::SpeechError;

/// Errors raised while encoding or persisting WAV audio.
#[derive(Debug, thiserror::Error)]
pub enum WavError {
    /// The WAV encoder or decoder rejected the data.
    #[error("WAV codec error: {0}")]
    Codec(#[from] hound::Error),

    /// A temporary artifact file could not be created or kept.
    #[error("Failed to persist audio artifact {path}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error (temp dir, artifact reads).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Blocking encode task did not complete.
    #[error("Encoder task failed: {0}")]
    Task(String),
}

impl From<WavError> for SpeechError {
    fn from(err: WavError) -> Self {
        Self::Internal(err.to_string())
    }
}
