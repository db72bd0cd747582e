//! CLI-specific error types and mappings.
//!
//! Maps core, engine and settings errors to exit codes and user-facing
//! messages.

use thiserror::Error;
use voxplay_core::{EngineError, SettingsError, SpeechError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The request itself was unusable (empty text, unknown voice).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The engine could not be loaded or failed to synthesize.
    #[error("Engine error: {0}")]
    Engine(String),

    /// Player process error.
    #[error("Playback error: {0}")]
    Playback(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// The HTTP server stopped with an error.
    #[error("Server error: {0:#}")]
    Server(#[from] anyhow::Error),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Engine(_) => 69,    // EX_UNAVAILABLE
            Self::Playback(_) => 71,  // EX_OSERR
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
            Self::Server(_) => 1,
        }
    }
}

impl From<SpeechError> for CliError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::InvalidRequest(_) | SpeechError::UnsupportedVoice(_) => {
                Self::Arguments(err.to_string())
            }
            SpeechError::EngineUnavailable(_) | SpeechError::SynthesisFailed(_) => {
                Self::Engine(err.to_string())
            }
            SpeechError::NoPlaybackBackend { .. } | SpeechError::PlaybackSpawnFailed { .. } => {
                Self::Playback(err.to_string())
            }
            SpeechError::Internal(msg) => Self::Io(msg),
        }
    }
}

impl From<EngineError> for CliError {
    fn from(err: EngineError) -> Self {
        Self::Engine(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<voxplay_voice::WavError> for CliError {
    fn from(err: voxplay_voice::WavError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
