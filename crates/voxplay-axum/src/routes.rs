//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// API routes without the `/api` prefix, for nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(handlers::health::ping))
        // Synthesis
        .route("/tts", post(handlers::tts::synthesize))
        .route("/tts/play", post(handlers::tts::play))
        // Playback
        .route("/tts/cancel", post(handlers::playback::cancel))
        .route("/playing", get(handlers::playback::playing))
        // Voices
        .route("/voices", get(handlers::voices::list))
}

/// Create the application router.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/ping", get(handlers::health::ping))
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}
