//! Audio artifacts produced by a speech engine.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Sample rate assumed when an engine does not report one (Hz).
pub const DEFAULT_SAMPLE_RATE: u32 = 22_050;

/// Mono PCM audio held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmAudio {
    /// Samples in `[-1.0, 1.0]`.
    pub samples: Vec<f32>,
    /// Engine-reported sample rate, if the engine reports one.
    pub sample_rate: Option<u32>,
}

impl PcmAudio {
    /// Create a buffer with an engine-reported sample rate.
    pub const fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate: Some(sample_rate),
        }
    }

    /// Create a buffer whose sample rate the engine did not report.
    pub const fn without_rate(samples: Vec<f32>) -> Self {
        Self {
            samples,
            sample_rate: None,
        }
    }

    /// The reported sample rate, or [`DEFAULT_SAMPLE_RATE`].
    pub fn effective_sample_rate(&self) -> u32 {
        self.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE)
    }

    /// Playback duration of the buffer.
    #[allow(clippy::cast_precision_loss)]
    pub fn duration(&self) -> Duration {
        let rate = self.effective_sample_rate().max(1);
        Duration::from_secs_f64(self.samples.len() as f64 / f64::from(rate))
    }
}

/// Output of a synthesis call.
///
/// The gateway owns a `File` artifact until the playback launcher or the
/// response writer consumes it. Files are never deleted by voxplay.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioArtifact {
    /// In-memory buffer; encoded to WAV on demand.
    Pcm(PcmAudio),
    /// A playable WAV file already written to disk.
    File(PathBuf),
}

impl AudioArtifact {
    /// Path of the artifact when it is already on disk.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Pcm(_) => None,
            Self::File(path) => Some(path),
        }
    }
}
