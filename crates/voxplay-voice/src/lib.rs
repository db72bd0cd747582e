//! Speech engine adapters and audio encoding for voxplay.
//!
//! Engines drive external TTS executables and implement the
//! [`SpeechEngine`](voxplay_core::SpeechEngine) port:
//!
//! | Engine      | Artifact | Voice selection            |
//! |-------------|----------|----------------------------|
//! | `piper`     | PCM      | only for multi-speaker models |
//! | `espeak-ng` | WAV file | yes (`-v <voice>`)         |
#![deny(unused_crate_dependencies)]

pub mod backend;
pub mod error;
pub mod wav;

pub use backend::espeak::{EspeakConfig, EspeakEngine};
pub use backend::piper::{PiperConfig, PiperEngine};
pub use backend::{EngineConfig, EngineKind, load_engine};
pub use error::WavError;
pub use wav::{RenderedWav, encode_wav, materialize, render_wav, wav_sample_rate, write_wav};

#[cfg(test)]
use tokio_test as _;
