//! Playback status reported to clients.

use serde::{Deserialize, Serialize};

/// Point-in-time view of server-side playback.
///
/// Advisory only: a player may exit between the poll and the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    /// `true` iff `count > 0`.
    pub playing: bool,
    /// Number of player processes observed alive.
    pub count: usize,
}

impl PlaybackStatus {
    /// Build a status from a live-process count.
    pub const fn from_live_count(count: usize) -> Self {
        Self {
            playing: count > 0,
            count,
        }
    }
}
