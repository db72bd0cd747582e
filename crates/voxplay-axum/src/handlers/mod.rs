//! HTTP request handlers.
//!
//! Each submodule covers one API area. Handlers are thin: they extract the
//! request, call the gateway, launcher or registry, and shape the response.

pub mod health;
pub mod playback;
pub mod tts;
pub mod voices;
