//! Serve command handler.

use tracing::info;
use voxplay_axum::{ServerConfig, start_server};

use crate::commands::{EngineArgs, PlaybackArgs};
use crate::error::CliError;

/// Options for `voxplay serve`.
pub struct ServeOptions {
    pub host: std::net::IpAddr,
    pub port: u16,
    pub voices: Option<Vec<String>>,
    pub cors_origins: Vec<String>,
    pub engine: EngineArgs,
    pub playback: PlaybackArgs,
}

/// Build the server configuration from CLI options.
///
/// An engine that cannot be configured (e.g. piper without a model) is
/// reported up front instead of serving 503s forever.
pub fn server_config(opts: ServeOptions) -> Result<ServerConfig, CliError> {
    let mut config = ServerConfig {
        host: opts.host,
        port: opts.port,
        ..ServerConfig::default()
    }
    .with_engine(opts.engine.to_config()?)
    .with_playback(opts.playback.to_settings()?);

    if let Some(voices) = opts.voices {
        config = config.with_voices(voices);
    }
    if !opts.cors_origins.is_empty() {
        config = config.with_allowed_origins(opts.cors_origins);
    }
    Ok(config)
}

/// Execute the serve command.
pub async fn execute(opts: ServeOptions) -> Result<(), CliError> {
    let config = server_config(opts)?;
    info!(
        addr = %config.socket_addr(),
        engine = ?config.engine.as_ref().map(voxplay_voice::EngineConfig::kind),
        players = ?config.playback.players,
        autoplay = config.playback.autoplay,
        "Starting voxplay server"
    );
    start_server(config).await?;
    Ok(())
}
