//! Axum HTTP adapter for voxplay.
//!
//! Exposes the synthesis gateway, the playback launcher and the playback
//! registry over a small JSON/WAV API. `bootstrap` is the composition root;
//! handlers stay thin and delegate to the core services.
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for helpers used only by integration tests
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, CorsConfig, ServerConfig, bootstrap, serve_with_shutdown,
    start_server,
};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
