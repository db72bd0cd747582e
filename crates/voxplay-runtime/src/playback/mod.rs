//! Server-side audio playback.
//!
//! - `backend` - player executables and presence detection
//! - `launcher` - spawning a detached player for an artifact file
//! - `handle` - one spawned player process
//! - `shutdown` - SIGTERM → SIGKILL escalation for a child
//! - `registry` - the shared set of tracked players

mod backend;
mod handle;
mod launcher;
mod registry;
mod shutdown;

pub use backend::PlayerBackend;
pub use handle::PlaybackHandle;
pub use launcher::PlaybackLauncher;
pub use registry::PlaybackRegistry;
pub use shutdown::{TerminationOutcome, terminate_child};
