//! Subcommands and their shared argument groups.
//!
//! Every option can also be set through a `VOXPLAY_*` environment variable
//! (or a `.env` file in the working directory).

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use voxplay_core::{
    DEFAULT_PORT, DEFAULT_TERMINATION_GRACE_MS, PlaybackSettings, validate_settings,
};
use voxplay_voice::{EngineConfig, EngineKind, EspeakConfig, PiperConfig};

use crate::error::CliError;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "VOXPLAY_HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "VOXPLAY_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Voices advertised by /api/voices instead of asking the engine
        #[arg(long, env = "VOXPLAY_VOICES", value_delimiter = ',')]
        voices: Option<Vec<String>>,

        /// Allowed CORS origins (default: any)
        #[arg(long = "cors-origin", env = "VOXPLAY_CORS_ORIGINS", value_delimiter = ',')]
        cors_origins: Vec<String>,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// Speak text on this machine and wait until playback ends
    Say {
        /// Text to speak
        text: String,

        /// Voice or speaker id
        #[arg(long)]
        voice: Option<String>,

        /// Write a WAV file instead of playing
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// List the voices the engine offers
    Voices {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Engine selection.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Engine to drive: piper or espeak
    #[arg(long, env = "VOXPLAY_ENGINE", default_value = "piper")]
    pub engine: EngineKind,

    /// piper executable
    #[arg(long, env = "VOXPLAY_PIPER_BIN", default_value = "piper")]
    pub piper_bin: PathBuf,

    /// piper voice model (.onnx)
    #[arg(long, env = "VOXPLAY_PIPER_MODEL")]
    pub piper_model: Option<PathBuf>,

    /// piper model config (default: <model>.json)
    #[arg(long, env = "VOXPLAY_PIPER_CONFIG")]
    pub piper_config: Option<PathBuf>,

    /// espeak-ng executable
    #[arg(long, env = "VOXPLAY_ESPEAK_BIN", default_value = "espeak-ng")]
    pub espeak_bin: PathBuf,

    /// espeak-ng voice used when a request names none
    #[arg(long, env = "VOXPLAY_ESPEAK_VOICE")]
    pub espeak_voice: Option<String>,
}

impl EngineArgs {
    pub fn to_config(&self) -> Result<EngineConfig, CliError> {
        match self.engine {
            EngineKind::Piper => {
                let model = self.piper_model.clone().ok_or_else(|| {
                    CliError::Config(
                        "the piper engine needs a model (--piper-model or VOXPLAY_PIPER_MODEL)"
                            .to_string(),
                    )
                })?;
                Ok(EngineConfig::Piper(PiperConfig {
                    binary: self.piper_bin.clone(),
                    model,
                    model_config: self.piper_config.clone(),
                }))
            }
            EngineKind::Espeak => Ok(EngineConfig::Espeak(EspeakConfig {
                binary: self.espeak_bin.clone(),
                default_voice: self.espeak_voice.clone(),
            })),
        }
    }
}

/// Server-side playback options.
#[derive(Args, Debug, Clone)]
pub struct PlaybackArgs {
    /// Player executables in priority order (default: /usr/bin/paplay,/usr/bin/aplay)
    #[arg(long, env = "VOXPLAY_PLAYERS", value_delimiter = ',')]
    pub players: Vec<String>,

    /// Milliseconds between SIGTERM and SIGKILL when cancelling
    #[arg(long, env = "VOXPLAY_TERMINATION_GRACE_MS", default_value_t = DEFAULT_TERMINATION_GRACE_MS)]
    pub grace_ms: u64,

    /// Also play audio on the server when returning it
    #[arg(long, env = "VOXPLAY_AUTOPLAY")]
    pub autoplay: bool,
}

impl PlaybackArgs {
    pub fn to_settings(&self) -> Result<PlaybackSettings, CliError> {
        let mut settings = PlaybackSettings {
            termination_grace_ms: self.grace_ms,
            autoplay: self.autoplay,
            ..PlaybackSettings::default()
        };
        if !self.players.is_empty() {
            settings.players.clone_from(&self.players);
        }
        validate_settings(&settings)?;
        Ok(settings)
    }
}
