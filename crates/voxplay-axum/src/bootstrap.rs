//! Composition root for the Axum server.
//!
//! Builds the gateway, launcher and registry from a [`ServerConfig`], starts
//! loading the engine in the background and serves the router until Ctrl-C.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use voxplay_core::{DEFAULT_PORT, PlaybackSettings, SynthesisGateway, validate_settings};
use voxplay_runtime::{PlaybackLauncher, PlaybackRegistry};
use voxplay_voice::{EngineConfig, load_engine};

#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    #[default]
    AllowAll,
    AllowOrigins(Vec<String>),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Engine to load at startup. `None` leaves synthesis unavailable.
    pub engine: Option<EngineConfig>,
    /// Operator-supplied voice list served by `/api/voices`.
    pub voices: Option<Vec<String>>,
    pub playback: PlaybackSettings,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            engine: None,
            voices: None,
            playback: PlaybackSettings::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = Some(engine);
        self
    }

    #[must_use]
    pub fn with_voices(mut self, voices: Vec<String>) -> Self {
        self.voices = Some(voices);
        self
    }

    #[must_use]
    pub fn with_playback(mut self, playback: PlaybackSettings) -> Self {
        self.playback = playback;
        self
    }

    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Services shared by every handler.
pub struct AxumContext {
    pub gateway: Arc<SynthesisGateway>,
    pub launcher: Arc<PlaybackLauncher>,
    pub registry: Arc<PlaybackRegistry>,
    /// Also play audio server-side when returning it to the client.
    pub autoplay: bool,
}

impl AxumContext {
    /// Assemble a context around an existing gateway.
    pub fn new(gateway: Arc<SynthesisGateway>, playback: &PlaybackSettings) -> Self {
        Self {
            gateway,
            launcher: Arc::new(PlaybackLauncher::from_settings(playback)),
            registry: Arc::new(PlaybackRegistry::from_settings(playback)),
            autoplay: playback.autoplay,
        }
    }
}

/// Build the context and start loading the engine.
///
/// Returns as soon as the services exist. Requests arriving before the
/// engine finishes loading get `503 ENGINE_UNAVAILABLE`.
pub async fn bootstrap(config: ServerConfig) -> Result<AxumContext> {
    validate_settings(&config.playback).context("invalid playback settings")?;

    let mut gateway = SynthesisGateway::new();
    if let Some(voices) = config.voices {
        gateway = gateway.with_voice_override(voices);
    }
    let gateway = Arc::new(gateway);

    match config.engine {
        Some(engine) => {
            tokio::spawn({
                let gateway = Arc::clone(&gateway);
                async move {
                    let kind = engine.kind();
                    match load_engine(&engine).await {
                        Ok(loaded) => {
                            info!(engine = %kind, "TTS engine ready");
                            gateway.install(loaded).await;
                        }
                        Err(e) => {
                            warn!(engine = %kind, error = %e, "TTS engine failed to load");
                            gateway.mark_failed(e.to_string()).await;
                        }
                    }
                }
            });
        }
        None => {
            warn!("No TTS engine configured; synthesis endpoints will return 503");
            gateway.mark_failed("no engine configured").await;
        }
    }

    let ctx = AxumContext::new(gateway, &config.playback);
    if !ctx.launcher.has_backend() {
        warn!(
            players = ?config.playback.players,
            "No playback backend found; server-side playback will fail"
        );
    }
    Ok(ctx)
}

/// Run the HTTP server until Ctrl-C, then stop any playback still running.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let cors = config.cors.clone();

    let ctx = bootstrap(config).await?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    serve_with_shutdown(listener, ctx, &cors, shutdown_signal()).await
}

/// Serve on `listener` until `shutdown` resolves, then cancel all tracked
/// playback.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    ctx: AxumContext,
    cors: &CorsConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let registry = Arc::clone(&ctx.registry);
    let app = crate::routes::create_router(ctx, cors);

    info!("voxplay listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    let canceled = registry.cancel_all().await;
    info!(canceled, "voxplay server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
