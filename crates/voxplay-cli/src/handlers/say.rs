//! Say command handler.
//!
//! Synthesizes text with the configured engine and either plays it through
//! the first available player or writes it to a WAV file.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};
use voxplay_core::{PlaybackSettings, SynthesisRequest};
use voxplay_runtime::PlaybackLauncher;
use voxplay_voice::{materialize, render_wav};

use super::ready_gateway;
use crate::commands::{EngineArgs, PlaybackArgs};
use crate::error::CliError;

/// Execute the say command.
///
/// Playback runs until the player exits; Ctrl-C stops it early.
pub async fn execute(
    text: String,
    voice: Option<String>,
    output: Option<&Path>,
    engine: &EngineArgs,
    playback: &PlaybackArgs,
) -> Result<(), CliError> {
    let settings = playback.to_settings()?;
    let gateway = ready_gateway(engine).await?;

    let mut request = SynthesisRequest::new(text);
    request.voice = voice;
    let artifact = gateway.synthesize(&request).await?;

    if let Some(path) = output {
        let wav = render_wav(&artifact).await?;
        tokio::fs::write(path, &wav.bytes).await?;
        println!("Wrote {} ({} Hz)", path.display(), wav.sample_rate);
        return Ok(());
    }

    let path = materialize(&artifact).await?;
    play_to_end(&path, &settings).await
}

async fn play_to_end(path: &Path, settings: &PlaybackSettings) -> Result<(), CliError> {
    let launcher = PlaybackLauncher::from_settings(settings);
    let handle = launcher.play(path)?;

    // Resolved outside the select so the wait future releases the child first
    let finished = tokio::select! {
        status = handle.wait() => Some(status),
        _ = tokio::signal::ctrl_c() => None,
    };

    match finished {
        Some(status) => {
            let status = status?;
            if !status.success() {
                warn!(backend = %handle.backend(), %status, "Player exited with an error");
                return Err(CliError::Playback(format!(
                    "{} exited with {status}",
                    handle.backend()
                )));
            }
            info!(backend = %handle.backend(), "Playback finished");
        }
        None => {
            let grace = Duration::from_millis(settings.termination_grace_ms);
            let outcome = handle.terminate(grace).await?;
            info!(?outcome, "Playback interrupted");
        }
    }
    Ok(())
}
