//! Port definitions (trait abstractions) for external systems.
//!
//! # Design Rules
//!
//! - No process or filesystem implementation details in signatures
//! - Engine errors are engine-level facts; the gateway decides what they
//!   mean to a caller

pub mod speech_engine;

pub use speech_engine::{EngineError, SpeechEngine};

#[cfg(test)]
pub use speech_engine::MockSpeechEngine;
