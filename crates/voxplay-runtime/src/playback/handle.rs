//! Handle to one spawned player process.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::process::Child;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::shutdown::{TerminationOutcome, terminate_child};

/// A player process started by the launcher.
///
/// Clones share the same child process, so the registry can poll or
/// terminate a handle without holding its own lock.
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    id: Uuid,
    pid: Option<u32>,
    artifact_path: PathBuf,
    backend: String,
    started_at: DateTime<Utc>,
    child: Arc<Mutex<Child>>,
}

impl PlaybackHandle {
    /// Wrap a freshly spawned player.
    pub fn new(child: Child, artifact_path: impl Into<PathBuf>, backend: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            pid: child.id(),
            artifact_path: artifact_path.into(),
            backend: backend.into(),
            started_at: Utc::now(),
            child: Arc::new(Mutex::new(child)),
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    pub const fn pid(&self) -> Option<u32> {
        self.pid
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Poll the process without blocking.
    ///
    /// A process whose state cannot be read is reported as dead.
    pub async fn is_alive(&self) -> bool {
        let mut child = self.child.lock().await;
        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                debug!(id = %self.id, backend = %self.backend, status = ?status, "Player exited");
                false
            }
            Err(e) => {
                warn!(id = %self.id, backend = %self.backend, error = %e, "Error checking player");
                false
            }
        }
    }

    /// Stop the player: SIGTERM, then SIGKILL once `grace` expires.
    pub async fn terminate(&self, grace: Duration) -> io::Result<TerminationOutcome> {
        let mut child = self.child.lock().await;
        terminate_child(&mut child, grace).await
    }

    /// Wait for playback to finish on its own.
    pub async fn wait(&self) -> io::Result<ExitStatus> {
        self.child.lock().await.wait().await
    }
}
