// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Orchestrator flow with stub providers
//!
//! Covers text provider ordering, fail-fast paths, fallback imagery when no
//! image key is configured, and the wall-clock ceiling.

use super::common::{as_text, CallLog, StubImages, StubText};
use async_trait::async_trait;
use fabstir_sitegen::imagery::{FallbackImageLibrary, ImagePipeline, ImageProvider, ImageSource};
use fabstir_sitegen::orchestrator::{
    GenerationError, GenerationRequest, GenerationStage, ImageChoice, Orchestrator, SiteFeatures,
};
use fabstir_sitegen::prompt::PromptBuilder;
use fabstir_sitegen::textgen::{TextGenerationChain, TextProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

const SITE: &str = "```html\n<!DOCTYPE html><html><body><h1>Kedai</h1></body></html>\n```";

fn orchestrator(
    text: Vec<Arc<dyn TextProvider>>,
    images: Option<Arc<dyn ImageProvider>>,
) -> Orchestrator {
    Orchestrator::new(
        TextGenerationChain::new(text),
        ImagePipeline::new(images, Duration::ZERO),
        PromptBuilder::new("60123456789"),
    )
    .unwrap()
}

#[tokio::test]
async fn test_primary_failure_falls_through_to_secondary() {
    let log = CallLog::new();
    let primary = StubText::new("primary", None, &log);
    let secondary = StubText::new("secondary", Some(SITE), &log);
    let orch = orchestrator(as_text(vec![primary.clone(), secondary.clone()]), None);

    let site = assert_ok!(orch.generate(&GenerationRequest::new("Kedai runcit")).await);

    assert_eq!(site.text_provider, "secondary");
    assert_eq!(site.html, "<!DOCTYPE html><html><body><h1>Kedai</h1></body></html>");
    assert_eq!(log.order(), vec!["primary", "secondary"]);
    assert_eq!(primary.call_count(), 1);
    assert_eq!(secondary.call_count(), 1);
}

#[tokio::test]
async fn test_successful_primary_skips_secondary() {
    let log = CallLog::new();
    let primary = StubText::new("primary", Some(SITE), &log);
    let secondary = StubText::new("secondary", Some(SITE), &log);
    let orch = orchestrator(as_text(vec![primary, secondary.clone()]), None);

    let site = assert_ok!(orch.generate(&GenerationRequest::new("Kedai runcit")).await);
    assert_eq!(site.text_provider, "primary");
    assert_eq!(secondary.call_count(), 0);
}

#[tokio::test]
async fn test_unconfigured_primary_is_skipped() {
    let log = CallLog::new();
    let primary = StubText::unconfigured("primary", &log);
    let secondary = StubText::new("secondary", Some(SITE), &log);
    let orch = orchestrator(as_text(vec![primary.clone(), secondary]), None);

    assert_ok!(orch.generate(&GenerationRequest::new("Kedai runcit")).await);
    assert_eq!(primary.call_count(), 0);
    assert_eq!(log.order(), vec!["secondary"]);
}

#[tokio::test]
async fn test_cat_shop_without_image_key_uses_pet_fallback() {
    let log = CallLog::new();
    let primary = StubText::new("primary", Some(SITE), &log);
    let orch = orchestrator(as_text(vec![primary.clone()]), None);

    let site = assert_ok!(orch.generate(&GenerationRequest::new("kedai kucing")).await);

    assert_eq!(site.image_source, ImageSource::Fallback);
    let (set_name, pets) = FallbackImageLibrary::new().select("kedai kucing");
    assert_eq!(set_name, "pets");
    let prompt = primary.prompt();
    for uri in pets.all() {
        assert!(prompt.contains(uri), "prompt is missing {}", uri);
    }
    assert!(prompt.contains("Bahasa Melayu"));
}

#[tokio::test]
async fn test_no_text_provider_fails_before_any_call() {
    let log = CallLog::new();
    let images = StubImages::new(vec![true; 5]);
    let orch = orchestrator(
        as_text(vec![
            StubText::unconfigured("primary", &log),
            StubText::unconfigured("secondary", &log),
        ]),
        Some(images.clone() as Arc<dyn ImageProvider>),
    );

    let err = assert_err!(orch.generate(&GenerationRequest::new("Kedai kek")).await);
    assert_eq!(err, GenerationError::NoTextProviderConfigured);
    assert_eq!(images.call_count(), 0);
    assert!(log.order().is_empty());
}

#[tokio::test]
async fn test_all_providers_failing_is_generic_failure() {
    let log = CallLog::new();
    let orch = orchestrator(
        as_text(vec![
            StubText::new("primary", None, &log),
            StubText::new("secondary", Some("   "), &log),
        ]),
        None,
    );

    let err = assert_err!(orch.generate(&GenerationRequest::new("Kedai kek")).await);
    assert_eq!(err, GenerationError::TextGenerationExhausted);
    assert_eq!(err.public_message(), "generation failed");
    assert_eq!(log.order(), vec!["primary", "secondary"]);
}

#[tokio::test]
async fn test_generated_images_reach_the_prompt() {
    let log = CallLog::new();
    let primary = StubText::new("primary", Some(SITE), &log);
    let images = StubImages::new(vec![true; 5]);
    let orch = orchestrator(
        as_text(vec![primary.clone()]),
        Some(images as Arc<dyn ImageProvider>),
    );

    let site = assert_ok!(orch.generate(&GenerationRequest::new("Bakery in Penang")).await);
    assert_eq!(site.image_source, ImageSource::Generated);
    assert!(primary.prompt().contains("Hero image: data:image/png;base64,AI0"));
    assert!(primary.prompt().contains("Gallery image 4: data:image/png;base64,AI4"));
}

#[tokio::test]
async fn test_no_images_and_no_whatsapp_request() {
    let log = CallLog::new();
    let reply = r#"<html><body><img src="https://images.unsplash.com/x"><a href="https://wa.me/60123456789">Chat</a></body></html>"#;
    let primary = StubText::new("primary", Some(reply), &log);
    let images = StubImages::new(vec![true; 5]);
    let orch = orchestrator(
        as_text(vec![primary.clone()]),
        Some(images.clone() as Arc<dyn ImageProvider>),
    );

    let request = GenerationRequest::new("Kedai kek")
        .with_image_choice(ImageChoice::None)
        .with_features(SiteFeatures { whatsapp: false });
    let site = assert_ok!(orch.generate(&request).await);

    assert_eq!(site.html, "<html><body></body></html>");
    assert_eq!(site.image_source, ImageSource::Omitted);
    assert_eq!(images.call_count(), 0);
    assert!(!site.stages.contains(&GenerationStage::BuildingImages));
    assert!(primary.prompt().contains("Do NOT use any <img> tags"));
    assert!(primary.prompt().contains("Do NOT include any WhatsApp"));
}

struct SlowText;

#[async_trait]
impl TextProvider for SlowText {
    async fn attempt(&self, _prompt: &str) -> Option<String> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Some(SITE.to_string())
    }

    fn name(&self) -> &'static str {
        "slow"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[tokio::test]
async fn test_request_ceiling_abandons_in_flight_work() {
    let orch = orchestrator(vec![Arc::new(SlowText) as Arc<dyn TextProvider>], None);
    let err = assert_err!(
        orch.generate_within(&GenerationRequest::new("Kedai kek"), Duration::from_millis(50))
            .await
    );
    assert!(matches!(err, GenerationError::TimedOut(_)));
    assert_eq!(err.public_message(), "generation timed out");
}
