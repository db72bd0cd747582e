//! Registry of spawned player processes.

use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;
use voxplay_core::{DEFAULT_TERMINATION_GRACE_MS, PlaybackSettings, PlaybackStatus};

use super::handle::PlaybackHandle;

/// Tracks every player started by this process.
///
/// One lock guards the list. It is held only to append, copy or swap the
/// list; polling and termination always happen after it is released.
#[derive(Debug)]
pub struct PlaybackRegistry {
    active: Mutex<Vec<PlaybackHandle>>,
    grace: Duration,
}

impl PlaybackRegistry {
    /// Registry that waits `grace` after SIGTERM before killing a player.
    pub fn new(grace: Duration) -> Self {
        Self {
            active: Mutex::new(Vec::new()),
            grace,
        }
    }

    pub fn from_settings(settings: &PlaybackSettings) -> Self {
        Self::new(Duration::from_millis(settings.termination_grace_ms))
    }

    /// Track a newly spawned player.
    pub async fn record(&self, handle: PlaybackHandle) {
        let mut active = self.active.lock().await;
        debug!(id = %handle.id(), backend = %handle.backend(), tracked = active.len() + 1, "Recording playback");
        active.push(handle);
    }

    /// Count players that are still running.
    ///
    /// Players found dead are dropped from the registry. The result is
    /// approximate: a player may exit right after being polled.
    pub async fn status(&self) -> PlaybackStatus {
        let snapshot = self.active.lock().await.clone();
        if snapshot.is_empty() {
            return PlaybackStatus::default();
        }

        let polls = snapshot.iter().map(|h| async move { (h.id(), h.is_alive().await) });
        let results = join_all(polls).await;

        let dead: Vec<Uuid> = results
            .iter()
            .filter(|(_, alive)| !alive)
            .map(|(id, _)| *id)
            .collect();
        let live = results.len() - dead.len();

        if !dead.is_empty() {
            let mut active = self.active.lock().await;
            active.retain(|h| !dead.contains(&h.id()));
            debug!(pruned = dead.len(), remaining = active.len(), "Pruned finished players");
        }

        PlaybackStatus::from_live_count(live)
    }

    /// Stop every tracked player and forget them.
    ///
    /// Returns how many players were stopped, counting ones that had already
    /// exited. A player that cannot be stopped is logged and not counted.
    pub async fn cancel_all(&self) -> usize {
        let captured = std::mem::take(&mut *self.active.lock().await);
        if captured.is_empty() {
            return 0;
        }

        let grace = self.grace;
        let terminations = captured
            .iter()
            .map(|h| async move { (h, h.terminate(grace).await) });

        let mut canceled = 0;
        for (handle, result) in join_all(terminations).await {
            match result {
                Ok(outcome) => {
                    debug!(id = %handle.id(), pid = ?handle.pid(), outcome = ?outcome, "Player stopped");
                    canceled += 1;
                }
                Err(e) => {
                    warn!(id = %handle.id(), pid = ?handle.pid(), error = %e, "Failed to stop player");
                }
            }
        }

        info!(canceled, tracked = captured.len(), "Cancelled playback");
        canceled
    }

    /// Number of tracked handles, live or not.
    pub async fn len(&self) -> usize {
        self.active.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.active.lock().await.is_empty()
    }
}

impl Default for PlaybackRegistry {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TERMINATION_GRACE_MS))
    }
}
