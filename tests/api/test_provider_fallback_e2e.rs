// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end provider fallback against an in-process mock backend
//!
//! One axum server on 127.0.0.1:0 plays all three vendors:
//! - chat completions always answers 500
//! - messages answers with a fenced HTML document
//! - text-to-image succeeds for the hero and two gallery calls only

use axum::{
    body::Body,
    extract::{Path, State},
    http::{Method, Request, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use fabstir_sitegen::{
    api::http_server::{create_app, AppState},
    config::{ProviderKeys, SiteGenConfig},
    imagery::FallbackImageLibrary,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

const PAGE: &str = "<!DOCTYPE html><html><body><h1>Kedai Kucing</h1></body></html>";

#[derive(Default)]
struct MockBackend {
    order: Mutex<Vec<&'static str>>,
    anthropic_prompt: Mutex<Option<String>>,
    image_calls: AtomicUsize,
}

async fn chat_completions(State(mock): State<Arc<MockBackend>>) -> impl IntoResponse {
    mock.order.lock().unwrap().push("openai");
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn messages(
    State(mock): State<Arc<MockBackend>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    mock.order.lock().unwrap().push("anthropic");
    *mock.anthropic_prompt.lock().unwrap() =
        body["messages"][0]["content"].as_str().map(str::to_string);
    Json(json!({
        "content": [{ "type": "text", "text": format!("```html\n{}\n```", PAGE) }]
    }))
}

async fn text_to_image(
    State(mock): State<Arc<MockBackend>>,
    Path(_engine): Path<String>,
) -> impl IntoResponse {
    // hero, gallery 1 and gallery 2 succeed; gallery 3 and 4 fail
    let index = mock.image_calls.fetch_add(1, Ordering::SeqCst);
    if index < 3 {
        (StatusCode::OK, vec![0x89u8, b'P', b'N', b'G']).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "busy").into_response()
    }
}

async fn spawn_backend(mock: Arc<MockBackend>) -> String {
    let app = Router::new()
        .route("/chat/completions", post(chat_completions))
        .route("/messages", post(messages))
        .route("/v1/generation/:engine/text-to-image", post(text_to_image))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn config_for(base_url: &str) -> SiteGenConfig {
    let mut config = SiteGenConfig::default();
    config.providers = ProviderKeys {
        openai_api_key: Some("sk-test".to_string()),
        anthropic_api_key: Some("ak-test".to_string()),
        stability_api_key: Some("st-test".to_string()),
    };
    config.openai.base_url = base_url.to_string();
    config.anthropic.base_url = base_url.to_string();
    config.stability.base_url = base_url.to_string();
    config.text_timeout_secs = 5;
    config.image_timeout_secs = 5;
    config.gallery_delay_ms = 0;
    config
}

#[tokio::test]
async fn test_secondary_answers_after_primary_500_and_gallery_falls_back() {
    let mock = Arc::new(MockBackend::default());
    let base_url = spawn_backend(mock.clone()).await;
    let config = config_for(&base_url);
    assert!(config.validate().is_ok());

    let state = AppState::from_config(&config).unwrap();
    let app = create_app(Arc::new(state));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/sites/generate")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"description": "kedai kucing"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["html"], PAGE);

    // Primary called before secondary, each exactly once
    assert_eq!(*mock.order.lock().unwrap(), vec!["openai", "anthropic"]);

    // Two of four gallery images is not enough: the prompt carries the
    // complete pet fallback set and no generated data URI
    assert_eq!(mock.image_calls.load(Ordering::SeqCst), 5);
    let prompt = mock.anthropic_prompt.lock().unwrap().clone().unwrap();
    let (_, pets) = FallbackImageLibrary::new().select("kedai kucing");
    for uri in pets.all() {
        assert!(prompt.contains(uri), "prompt is missing {}", uri);
    }
    assert!(!prompt.contains("data:image/png"));
}

#[tokio::test]
async fn test_status_reflects_configured_keys() {
    let mut config = SiteGenConfig::default();
    config.providers.anthropic_api_key = Some("ak-test".to_string());

    let app = create_app(Arc::new(AppState::from_config(&config).unwrap()));
    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/sites/status")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        body,
        json!({
            "openaiConfigured": false,
            "anthropicConfigured": true,
            "stabilityConfigured": false
        })
    );
}
