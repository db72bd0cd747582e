//! Core domain types, port definitions and services for voxplay.
//!
//! This crate has no knowledge of HTTP, child processes or concrete speech
//! engines. Adapters (`voxplay-voice`, `voxplay-runtime`, `voxplay-axum`)
//! depend on it, never the other way around.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{AudioArtifact, DEFAULT_SAMPLE_RATE, PcmAudio, PlaybackStatus, SynthesisRequest};
pub use error::SpeechError;
pub use ports::{EngineError, SpeechEngine};
pub use services::{EngineState, SynthesisGateway};
pub use settings::{
    DEFAULT_PLAYERS, DEFAULT_PORT, DEFAULT_TERMINATION_GRACE_MS, PlaybackSettings, SettingsError,
    validate_settings,
};

// Silence unused dev-dependency warnings for helpers used only by some test modules
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio_test as _;
