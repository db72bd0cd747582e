//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Response shapes are kept separate from core types so the wire format
//! stays stable when the domain changes.

use serde::{Deserialize, Serialize};

/// `{ "ok": true }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}

/// Reply to a request that started server-side playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedResponse {
    pub ok: bool,
    pub played: bool,
}

impl PlayedResponse {
    pub const fn played() -> Self {
        Self {
            ok: true,
            played: true,
        }
    }
}

/// Reply to `POST /api/tts/cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    pub ok: bool,
    pub canceled: usize,
}

/// Reply to `GET /api/voices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub voices: Vec<String>,
}
