// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route tests for the site generation API
//!
//! Routes are exercised with `oneshot` against `create_app` using stub
//! providers, so no network access is needed.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use fabstir_sitegen::{
    api::http_server::{create_app, AppState},
    config::CredentialStatus,
    imagery::ImagePipeline,
    orchestrator::Orchestrator,
    prompt::PromptBuilder,
    textgen::{TextGenerationChain, TextProvider},
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot`

struct RouteStub {
    name: &'static str,
    reply: Option<&'static str>,
    delay: Duration,
    calls: AtomicUsize,
}

impl RouteStub {
    fn new(name: &'static str, reply: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl TextProvider for RouteStub {
    async fn attempt(&self, _prompt: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.reply.map(str::to_string)
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}

const PAGE: &str = "<!DOCTYPE html><html><body>Kedai</body></html>";

/// Helper: app with the given text providers and no image provider
fn app_with(providers: Vec<Arc<RouteStub>>, request_timeout: Duration) -> Router {
    let chain = TextGenerationChain::new(
        providers
            .into_iter()
            .map(|p| p as Arc<dyn TextProvider>)
            .collect(),
    );
    let orchestrator = Orchestrator::new(
        chain,
        ImagePipeline::new(None, Duration::ZERO),
        PromptBuilder::new("60123456789"),
    )
    .unwrap();

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        credentials: CredentialStatus {
            openai: true,
            anthropic: false,
            stability: false,
        },
        request_timeout,
    };
    create_app(Arc::new(state))
}

fn generate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/v1/sites/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_returns_html_and_modern_style() {
    let stub = RouteStub::new("primary", Some(PAGE));
    let app = app_with(vec![stub], Duration::from_secs(5));

    let response = app
        .oneshot(generate_request(r#"{"description": "Kedai kek", "image_choice": "none"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["html"], PAGE);
    assert_eq!(body["styles"][0]["style"], "modern");
    assert_eq!(body["styles"][0]["html"], PAGE);
}

#[tokio::test]
async fn test_business_description_field_is_accepted() {
    let stub = RouteStub::new("primary", Some(PAGE));
    let app = app_with(vec![stub], Duration::from_secs(5));

    let response = app
        .oneshot(generate_request(r#"{"business_description": "Kedai kek"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_description_is_400_without_provider_calls() {
    let stub = RouteStub::new("primary", Some(PAGE));
    let app = app_with(vec![stub.clone()], Duration::from_secs(5));

    for body in [r#"{}"#, r#"{"description": "   "}"#, "not json"] {
        let response = app.clone().oneshot(generate_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {:?}", body);
        let json = json_body(response).await;
        assert!(json["error"].is_string());
    }
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_exhausted_providers_is_500_generation_failed() {
    let app = app_with(
        vec![RouteStub::new("primary", None), RouteStub::new("secondary", None)],
        Duration::from_secs(5),
    );

    let response = app
        .oneshot(generate_request(r#"{"description": "Kedai kek"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["error"], "generation failed");
}

#[tokio::test]
async fn test_no_text_provider_is_500() {
    let app = app_with(vec![], Duration::from_secs(5));
    let response = app
        .oneshot(generate_request(r#"{"description": "Kedai kek"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_slow_generation_is_504() {
    let slow = Arc::new(RouteStub {
        name: "slow",
        reply: Some(PAGE),
        delay: Duration::from_secs(10),
        calls: AtomicUsize::new(0),
    });
    let app = app_with(vec![slow], Duration::from_millis(50));

    let response = app
        .oneshot(generate_request(r#"{"description": "Kedai kek"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json_body(response).await["error"], "generation timed out");
}

#[tokio::test]
async fn test_status_reports_credentials() {
    let app = app_with(vec![], Duration::from_secs(5));
    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/sites/status")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["openaiConfigured"], true);
    assert_eq!(body["anthropicConfigured"], false);
    assert_eq!(body["stabilityConfigured"], false);
}

#[tokio::test]
async fn test_health_degraded_without_text_provider() {
    let request = || {
        Request::builder()
            .method(Method::GET)
            .uri("/health")
            .body(Body::empty())
            .unwrap()
    };

    let degraded = app_with(vec![], Duration::from_secs(5))
        .oneshot(request())
        .await
        .unwrap();
    let body = json_body(degraded).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["issues"].as_array().unwrap().len(), 1);

    let healthy = app_with(vec![RouteStub::new("primary", Some(PAGE))], Duration::from_secs(5))
        .oneshot(request())
        .await
        .unwrap();
    let body = json_body(healthy).await;
    assert_eq!(body["status"], "healthy");
    assert!(body.get("issues").is_none());
}

#[tokio::test]
async fn test_generate_rejects_get() {
    let app = app_with(vec![], Duration::from_secs(5));
    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/sites/generate")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
