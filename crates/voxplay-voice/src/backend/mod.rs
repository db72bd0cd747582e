//! Speech engine backends.
//!
//! Each backend wraps an external TTS executable behind the
//! [`SpeechEngine`] port. [`load_engine`] builds the configured one as a
//! trait object so the synthesis gateway never names a concrete engine.
//!
//! | Kind     | Module     | Executable  |
//! |----------|------------|-------------|
//! | `piper`  | [`piper`]  | `piper`     |
//! | `espeak` | [`espeak`] | `espeak-ng` |

pub mod espeak;
pub mod piper;
mod util;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use voxplay_core::{EngineError, SpeechEngine};

use self::espeak::{EspeakConfig, EspeakEngine};
use self::piper::{PiperConfig, PiperEngine};

/// Engine families voxplay can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Piper,
    Espeak,
}

impl EngineKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Piper => "piper",
            Self::Espeak => "espeak",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "piper" => Ok(Self::Piper),
            "espeak" | "espeak-ng" => Ok(Self::Espeak),
            other => Err(format!("unknown engine '{other}' (expected piper or espeak)")),
        }
    }
}

/// Fully resolved engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineConfig {
    Piper(PiperConfig),
    Espeak(EspeakConfig),
}

impl EngineConfig {
    pub const fn kind(&self) -> EngineKind {
        match self {
            Self::Piper(_) => EngineKind::Piper,
            Self::Espeak(_) => EngineKind::Espeak,
        }
    }
}

/// Load the configured engine.
///
/// Failures are reported as [`EngineError::NotReady`]; the caller records
/// them as the gateway's failed state.
pub async fn load_engine(config: &EngineConfig) -> Result<Arc<dyn SpeechEngine>, EngineError> {
    match config {
        EngineConfig::Piper(cfg) => Ok(Arc::new(PiperEngine::load(cfg).await?)),
        EngineConfig::Espeak(cfg) => Ok(Arc::new(EspeakEngine::load(cfg)?)),
    }
}
