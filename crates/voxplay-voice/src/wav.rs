//! WAV encoding for synthesis artifacts.
//!
//! PCM buffers are written as 16-bit mono WAV. File artifacts are assumed to
//! already be WAV; their sample rate is read back from the header.

use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::debug;
use voxplay_core::{AudioArtifact, DEFAULT_SAMPLE_RATE, PcmAudio};

use crate::error::WavError;

/// A WAV body ready to send to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWav {
    /// Complete RIFF/WAVE bytes.
    pub bytes: Vec<u8>,
    /// Sample rate in the WAV header.
    pub sample_rate: u32,
    /// Whether the bytes came from a file artifact.
    pub from_file: bool,
}

const fn spec_for(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)).round() as i16
}

fn write_samples<W: Write + Seek>(writer: W, pcm: &PcmAudio) -> Result<(), WavError> {
    let mut wav = WavWriter::new(writer, spec_for(pcm.effective_sample_rate()))?;
    for &sample in &pcm.samples {
        wav.write_sample(to_i16(sample))?;
    }
    wav.finalize()?;
    Ok(())
}

/// Encode a PCM buffer as an in-memory WAV file.
pub fn encode_wav(pcm: &PcmAudio) -> Result<Vec<u8>, WavError> {
    let mut cursor = Cursor::new(Vec::new());
    write_samples(&mut cursor, pcm)?;
    Ok(cursor.into_inner())
}

/// Write a PCM buffer to `path` as WAV.
pub fn write_wav(pcm: &PcmAudio, path: &Path) -> Result<(), WavError> {
    let file = std::fs::File::create(path)?;
    write_samples(BufWriter::new(file), pcm)
}

/// Read the sample rate from a WAV header.
pub fn wav_sample_rate(bytes: &[u8]) -> Result<u32, WavError> {
    let reader = WavReader::new(Cursor::new(bytes))?;
    Ok(reader.spec().sample_rate)
}

fn persist_pcm(pcm: &PcmAudio) -> Result<PathBuf, WavError> {
    let temp = tempfile::Builder::new()
        .prefix("voxplay-")
        .suffix(".wav")
        .tempfile()?;
    // Not deleted on drop; the player opens it after we return
    let (file, path) = temp.keep().map_err(|e| WavError::Persist {
        path: e.file.path().to_path_buf(),
        source: e.error,
    })?;
    write_samples(BufWriter::new(file), pcm)?;
    debug!(path = %path.display(), samples = pcm.samples.len(), "Wrote PCM artifact to disk");
    Ok(path)
}

/// Make sure an artifact exists on disk so a player process can read it.
///
/// File artifacts pass through unchanged. PCM buffers are written to a new
/// temporary WAV file that is never deleted by voxplay.
pub async fn materialize(artifact: &AudioArtifact) -> Result<PathBuf, WavError> {
    match artifact {
        AudioArtifact::File(path) => Ok(path.clone()),
        AudioArtifact::Pcm(pcm) => {
            let pcm = pcm.clone();
            tokio::task::spawn_blocking(move || persist_pcm(&pcm))
                .await
                .map_err(|e| WavError::Task(e.to_string()))?
        }
    }
}

/// Produce the WAV body for an artifact.
///
/// File artifacts whose header cannot be parsed are sent as-is with the
/// default sample rate.
pub async fn render_wav(artifact: &AudioArtifact) -> Result<RenderedWav, WavError> {
    match artifact {
        AudioArtifact::Pcm(pcm) => Ok(RenderedWav {
            bytes: encode_wav(pcm)?,
            sample_rate: pcm.effective_sample_rate(),
            from_file: false,
        }),
        AudioArtifact::File(path) => {
            let bytes = tokio::fs::read(path).await?;
            let sample_rate = wav_sample_rate(&bytes).unwrap_or_else(|e| {
                debug!(path = %path.display(), error = %e, "Unreadable WAV header");
                DEFAULT_SAMPLE_RATE
            });
            Ok(RenderedWav {
                bytes,
                sample_rate,
                from_file: true,
            })
        }
    }
}
