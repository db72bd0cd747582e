//! Playback settings domain types and validation.
//!
//! Pure domain types with no infrastructure dependencies. Adapters build a
//! `PlaybackSettings` from flags or environment and validate it once at
//! startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default HTTP port for the voxplay server.
pub const DEFAULT_PORT: u16 = 5002;

/// Player executables tried in priority order when none are configured.
pub const DEFAULT_PLAYERS: &[&str] = &["/usr/bin/paplay", "/usr/bin/aplay"];

/// Grace period between SIGTERM and SIGKILL when cancelling playback.
pub const DEFAULT_TERMINATION_GRACE_MS: u64 = 2_000;

/// Upper bound for the termination grace period.
const MAX_TERMINATION_GRACE_MS: u64 = 60_000;

/// Server-side playback configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Player executables, highest priority first. Absolute paths are checked
    /// on disk; bare names are looked up on `PATH`.
    pub players: Vec<String>,

    /// Milliseconds to wait after SIGTERM before escalating to SIGKILL.
    pub termination_grace_ms: u64,

    /// Also play the audio locally when returning it to the caller.
    pub autoplay: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS.iter().map(ToString::to_string).collect(),
            termination_grace_ms: DEFAULT_TERMINATION_GRACE_MS,
            autoplay: false,
        }
    }
}

/// Settings validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("At least one player backend must be configured")]
    NoPlayers,

    #[error("Player backend entry {0} is blank")]
    BlankPlayer(usize),

    #[error("Termination grace must be between 1 and {max} ms, got {0}", max = MAX_TERMINATION_GRACE_MS)]
    InvalidGrace(u64),
}

/// Validate playback settings.
pub fn validate_settings(settings: &PlaybackSettings) -> Result<(), SettingsError> {
    if settings.players.is_empty() {
        return Err(SettingsError::NoPlayers);
    }
    if let Some(index) = settings.players.iter().position(|p| p.trim().is_empty()) {
        return Err(SettingsError::BlankPlayer(index));
    }
    if settings.termination_grace_ms == 0 || settings.termination_grace_ms > MAX_TERMINATION_GRACE_MS
    {
        return Err(SettingsError::InvalidGrace(settings.termination_grace_ms));
    }
    Ok(())
}
