//! Core domain types.
//!
//! # Structure
//!
//! - `artifact` - Audio produced by synthesis (`AudioArtifact`, `PcmAudio`)
//! - `request` - Validated synthesis input (`SynthesisRequest`)
//! - `playback` - Aggregate playback status (`PlaybackStatus`)

mod artifact;
mod playback;
mod request;

pub use artifact::{AudioArtifact, DEFAULT_SAMPLE_RATE, PcmAudio};
pub use playback::PlaybackStatus;
pub use request::SynthesisRequest;
