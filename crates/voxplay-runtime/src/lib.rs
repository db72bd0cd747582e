//! Process runtime for voxplay.
//!
//! Owns everything that touches player child processes: detecting which
//! player backends exist on this host, spawning them, terminating them and
//! tracking the ones still running.
#![deny(unused_crate_dependencies)]

pub mod playback;

pub use playback::{
    PlaybackHandle, PlaybackLauncher, PlaybackRegistry, PlayerBackend, TerminationOutcome,
    terminate_child,
};

#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;
