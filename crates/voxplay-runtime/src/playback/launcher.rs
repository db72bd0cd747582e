//! Spawns detached player processes.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};
use voxplay_core::{PlaybackSettings, SpeechError};

use super::backend::PlayerBackend;
use super::handle::PlaybackHandle;

/// Starts playback of WAV files on the first available player backend.
#[derive(Debug, Clone)]
pub struct PlaybackLauncher {
    backends: Vec<PlayerBackend>,
}

impl PlaybackLauncher {
    /// Launcher trying `backends` in the given priority order.
    pub const fn new(backends: Vec<PlayerBackend>) -> Self {
        Self { backends }
    }

    pub fn from_settings(settings: &PlaybackSettings) -> Self {
        Self::new(settings.players.iter().map(PlayerBackend::new).collect())
    }

    pub fn backends(&self) -> &[PlayerBackend] {
        &self.backends
    }

    /// Whether any configured backend is present right now.
    pub fn has_backend(&self) -> bool {
        self.backends.iter().any(|b| b.locate().is_some())
    }

    /// Start playing `artifact` and return immediately.
    ///
    /// The player's stdio is detached; nothing waits for it to finish. Must
    /// be called from within a tokio runtime.
    pub fn play(&self, artifact: &Path) -> Result<PlaybackHandle, SpeechError> {
        let (backend, program) = self
            .backends
            .iter()
            .find_map(|b| b.locate().map(|path| (b, path)))
            .ok_or_else(|| SpeechError::NoPlaybackBackend {
                tried: self.backends.iter().map(|b| b.program().to_string()).collect(),
            })?;

        debug!(backend = %backend, artifact = %artifact.display(), "Spawning player");
        let child = Command::new(&program)
            .arg(artifact)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::PlaybackSpawnFailed {
                backend: backend.name().to_string(),
                message: e.to_string(),
            })?;

        let handle = PlaybackHandle::new(child, artifact, backend.name());
        info!(
            id = %handle.id(),
            pid = ?handle.pid(),
            backend = %handle.backend(),
            artifact = %artifact.display(),
            "Playback started"
        );
        Ok(handle)
    }
}

impl Default for PlaybackLauncher {
    fn default() -> Self {
        Self::from_settings(&PlaybackSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order_prefers_paplay() {
        let launcher = PlaybackLauncher::default();
        let names: Vec<_> = launcher.backends().iter().map(PlayerBackend::name).collect();
        assert_eq!(names, vec!["paplay", "aplay"]);
    }

    #[tokio::test]
    async fn no_backend_lists_what_was_tried() {
        let launcher = PlaybackLauncher::new(vec![
            PlayerBackend::new("/nonexistent/paplay"),
            PlayerBackend::new("/nonexistent/aplay"),
        ]);
        assert!(!launcher.has_backend());

        let err = launcher.play(Path::new("/tmp/speech.wav")).unwrap_err();
        assert_eq!(
            err,
            SpeechError::NoPlaybackBackend {
                tried: vec!["/nonexistent/paplay".into(), "/nonexistent/aplay".into()],
            }
        );
    }

    #[tokio::test]
    async fn empty_backend_list_is_no_backend() {
        let launcher = PlaybackLauncher::new(vec![]);
        let err = launcher.play(Path::new("/tmp/speech.wav")).unwrap_err();
        assert_eq!(err.kind(), "NO_PLAYBACK_BACKEND");
    }
}
