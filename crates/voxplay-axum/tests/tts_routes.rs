//! Integration tests for the synthesis, voice and liveness endpoints.
#![cfg(unix)]

mod common;

use std::sync::Arc;

use axum::http::{Request, StatusCode};
use serde_json::json;
use tempfile::TempDir;
use tower::ServiceExt;
use voxplay_axum::AxumContext;
use voxplay_core::{DEFAULT_SAMPLE_RATE, PcmAudio, SynthesisGateway};
use voxplay_voice::{wav_sample_rate, write_wav};

use common::engine::{FakeEngine, Output};
use common::{
    assert_error, body_bytes, context, get, parse_json, post_json, router, settings_with_player,
};

fn app_with(engine: FakeEngine) -> axum::Router {
    router(context(Arc::new(engine), &settings_with_player(None)))
}

// ── Liveness ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ping_routes_return_ok() {
    let app = app_with(FakeEngine::pcm(None));
    for uri in ["/ping", "/api/ping", "/health"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(parse_json(response).await["ok"], true, "{uri}");
    }
}

#[tokio::test]
async fn health_reports_engine_state() {
    let app = app_with(FakeEngine::pcm(None));
    let json = parse_json(get(&app, "/health").await).await;
    assert_eq!(json["engine"], "ready");

    let ctx = AxumContext::new(
        Arc::new(SynthesisGateway::new()),
        &settings_with_player(None),
    );
    let json = parse_json(get(&router(ctx), "/health").await).await;
    assert_eq!(json["engine"], "initializing");
}

// ── POST /api/tts ────────────────────────────────────────────────────────────

#[tokio::test]
async fn tts_returns_wav_with_default_rate() {
    let app = app_with(FakeEngine::pcm(None));
    let response = post_json(&app, "/api/tts", json!({"text": "hi"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "audio/wav");
    assert_eq!(response.headers()["x-sample-rate"], "22050");
    assert!(response.headers().get("content-disposition").is_none());

    let body = body_bytes(response).await;
    assert_eq!(&body[0..4], b"RIFF");
    assert_eq!(&body[8..12], b"WAVE");
    assert_eq!(wav_sample_rate(&body).unwrap(), DEFAULT_SAMPLE_RATE);
}

#[tokio::test]
async fn tts_uses_engine_reported_rate() {
    let app = app_with(FakeEngine::pcm(Some(16_000)));
    let response = post_json(&app, "/api/tts", json!({"text": "hello there"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-sample-rate"], "16000");
    let body = body_bytes(response).await;
    assert_eq!(wav_sample_rate(&body).unwrap(), 16_000);
}

#[tokio::test]
async fn tts_file_artifact_is_sent_as_speech_wav() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.wav");
    write_wav(&PcmAudio::new(vec![0.0; 64], 24_000), &path).unwrap();

    let app = app_with(FakeEngine::new(Output::File(path)));
    let response = post_json(&app, "/api/tts", json!({"text": "hi"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-sample-rate"], "24000");
    let disposition = response.headers()["content-disposition"].to_str().unwrap();
    assert!(disposition.contains("speech.wav"));
}

#[tokio::test]
async fn missing_text_is_rejected_before_the_engine() {
    let engine = Arc::new(FakeEngine::pcm(None));
    let app = router(context(engine.clone(), &settings_with_player(None)));

    for body in [json!({}), json!({"text": ""}), json!({"text": "   "})] {
        let response = post_json(&app, "/api/tts", body).await;
        assert_error(response, StatusCode::BAD_REQUEST, "INVALID_REQUEST").await;
    }
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = app_with(FakeEngine::pcm(None));
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tts")
                .header("content-type", "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_REQUEST").await;
}

#[tokio::test]
async fn voice_on_single_voice_engine_is_unsupported() {
    let app = app_with(FakeEngine::pcm(None));
    let response = post_json(&app, "/api/tts", json!({"text": "hello", "voice": "nonexistent"})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "UNSUPPORTED_VOICE").await;
}

#[tokio::test]
async fn unknown_voice_is_unsupported_not_500() {
    let app = app_with(FakeEngine::pcm(None).with_voices(&["p225"]));

    let response = post_json(&app, "/api/tts", json!({"text": "hello", "voice": "nonexistent"})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "UNSUPPORTED_VOICE").await;

    let response = post_json(&app, "/api/tts", json!({"text": "hello", "voice": "p225"})).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn engine_failure_is_500_with_message() {
    let app = app_with(FakeEngine::new(Output::Fail("model exploded".into())));
    let response = post_json(&app, "/api/tts", json!({"text": "hi"})).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = parse_json(response).await;
    assert_eq!(json["type"], "SYNTHESIS_FAILED");
    assert!(json["error"].as_str().unwrap().contains("model exploded"));
}

#[tokio::test]
async fn unloaded_engine_is_503_after_text_check() {
    let ctx = AxumContext::new(
        Arc::new(SynthesisGateway::new()),
        &settings_with_player(None),
    );
    let app = router(ctx);

    let response = post_json(&app, "/api/tts", json!({"text": "hi"})).await;
    assert_error(response, StatusCode::SERVICE_UNAVAILABLE, "ENGINE_UNAVAILABLE").await;

    let response = post_json(&app, "/api/tts", json!({"text": ""})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_REQUEST").await;

    let response = get(&app, "/api/voices").await;
    assert_error(response, StatusCode::SERVICE_UNAVAILABLE, "ENGINE_UNAVAILABLE").await;
}

// ── GET /api/voices ──────────────────────────────────────────────────────────

#[tokio::test]
async fn voices_come_from_the_engine() {
    let app = app_with(FakeEngine::pcm(None).with_voices(&["p225", "p226"]));
    let json = parse_json(get(&app, "/api/voices").await).await;
    assert_eq!(json, json!({"voices": ["p225", "p226"]}));
}

#[tokio::test]
async fn voice_override_replaces_engine_list() {
    let gateway = SynthesisGateway::with_engine(Arc::new(FakeEngine::pcm(None)))
        .with_voice_override(vec!["alto".into(), "bass".into()]);
    let app = router(AxumContext::new(Arc::new(gateway), &settings_with_player(None)));

    let json = parse_json(get(&app, "/api/voices").await).await;
    assert_eq!(json, json!({"voices": ["alto", "bass"]}));
}

// ── CORS ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = app_with(FakeEngine::pcm(None));
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/ping")
                .header("origin", "http://example.test")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
