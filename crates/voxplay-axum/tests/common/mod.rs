//! Common test utilities for voxplay-axum.
//!
//! A scripted `SpeechEngine`, fake player executables and request helpers
//! for driving the router with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

pub mod engine;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use voxplay_axum::{AxumContext, CorsConfig, create_router};
use voxplay_core::{PlaybackSettings, SpeechEngine, SynthesisGateway};

/// Write an executable fake player that sleeps for `secs` seconds.
pub fn sleeping_player(dir: &TempDir, secs: f32) -> PathBuf {
    let path = dir.path().join("paplay");
    fs::write(&path, format!("#!/bin/sh\nexec sleep {secs}\n")).expect("write fake player");
    let mut perms = fs::metadata(&path).expect("stat fake player").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod fake player");
    path
}

pub fn settings_with_player(player: Option<&PathBuf>) -> PlaybackSettings {
    let players = match player {
        Some(path) => vec![path.to_string_lossy().into_owned()],
        None => vec!["/nonexistent/voxplay/paplay".to_string()],
    };
    PlaybackSettings {
        players,
        termination_grace_ms: 500,
        autoplay: false,
    }
}

/// Build a context around a ready engine.
pub fn context(engine: Arc<dyn SpeechEngine>, settings: &PlaybackSettings) -> AxumContext {
    AxumContext::new(Arc::new(SynthesisGateway::with_engine(engine)), settings)
}

pub fn router(ctx: AxumContext) -> Router {
    create_router(ctx, &CorsConfig::AllowAll)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_empty(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

/// Parse the response body as JSON.
pub async fn parse_json(response: Response) -> serde_json::Value {
    let body = body_bytes(response).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| panic!("Expected valid JSON body: {e}"))
}

/// Assert an error response's status and `type` discriminant.
pub async fn assert_error(response: Response, status: StatusCode, error_type: &str) {
    assert_eq!(response.status(), status);
    let json = parse_json(response).await;
    assert_eq!(json["status"], status.as_u16());
    assert_eq!(json["type"], error_type);
    assert!(json["error"].is_string());
}
