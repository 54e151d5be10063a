// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Website generation orchestrator
//!
//! Sequences one request through classification, imagery, prompt assembly,
//! the text provider chain, extraction and policy enforcement. Every stage is
//! awaited before the next begins; a failure at any stage ends the request.

pub mod errors;
pub mod state;
pub mod types;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};

use crate::classifier::BusinessClassifier;
use crate::config::SiteGenConfig;
use crate::html::{HtmlExtractor, PolicyEnforcer};
use crate::imagery::{ImagePipeline, ImageProvider, ImageSource, StabilityImageProvider};
use crate::prompt::PromptBuilder;
use crate::textgen::{
    AnthropicTextProvider, OpenAiTextProvider, TextGenerationChain, TextProvider,
};

pub use errors::{GenerationError, GENERATION_FAILED};
pub use state::{GenerationStage, StageTracker};
pub use types::{GeneratedSite, GenerationRequest, ImageChoice, SiteFeatures};

/// Turns a business description into a finished HTML document
pub struct Orchestrator {
    classifier: BusinessClassifier,
    images: ImagePipeline,
    prompts: PromptBuilder,
    text: TextGenerationChain,
    extractor: HtmlExtractor,
    policy: PolicyEnforcer,
}

impl Orchestrator {
    pub fn new(text: TextGenerationChain, images: ImagePipeline, prompts: PromptBuilder) -> Result<Self> {
        Ok(Self {
            classifier: BusinessClassifier::new(),
            images,
            prompts,
            text,
            extractor: HtmlExtractor::new()?,
            policy: PolicyEnforcer::new()?,
        })
    }

    /// Wire the production providers from configuration. Providers whose key
    /// is absent are still constructed and report themselves unavailable.
    pub fn from_config(config: &SiteGenConfig) -> Result<Self> {
        let keys = &config.providers;
        let text_timeout = Duration::from_secs(config.text_timeout_secs);

        let openai = OpenAiTextProvider::new(
            keys.openai_api_key.clone().unwrap_or_default(),
            &config.openai.base_url,
            &config.openai.model,
            config.max_output_tokens,
            text_timeout,
        )?;
        let anthropic = AnthropicTextProvider::new(
            keys.anthropic_api_key.clone().unwrap_or_default(),
            &config.anthropic.base_url,
            &config.anthropic.model,
            config.max_output_tokens,
            text_timeout,
        )?;
        let chain = TextGenerationChain::new(vec![
            Arc::new(openai) as Arc<dyn TextProvider>,
            Arc::new(anthropic) as Arc<dyn TextProvider>,
        ]);

        let image_provider = match &keys.stability_api_key {
            Some(key) => Some(Arc::new(StabilityImageProvider::new(
                key.clone(),
                &config.stability.base_url,
                &config.stability.engine,
                Duration::from_secs(config.image_timeout_secs),
            )?) as Arc<dyn ImageProvider>),
            None => None,
        };
        let images = ImagePipeline::new(image_provider, config.gallery_delay())
            .with_min_gallery_images(config.min_gallery_images);

        info!(
            text_providers = ?chain.available_providers(),
            image_provider = images.has_provider(),
            "Orchestrator configured"
        );

        Self::new(chain, images, PromptBuilder::new(config.whatsapp_number.clone()))
    }

    /// Whether any text provider can be attempted
    pub fn has_text_provider(&self) -> bool {
        self.text.is_configured()
    }

    pub fn has_image_provider(&self) -> bool {
        self.images.has_provider()
    }

    /// Run one request to completion
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedSite, GenerationError> {
        let start = Instant::now();
        let mut stages = StageTracker::new();

        stages.advance(GenerationStage::ValidatingInput);
        if let Err(e) = request.validate() {
            stages.fail(&e);
            return Err(GenerationError::InvalidRequest(e));
        }
        if !self.text.is_configured() {
            stages.fail("no text provider configured");
            return Err(GenerationError::NoTextProviderConfigured);
        }

        let (images, image_source) = if request.image_choice.wants_images() {
            stages.advance(GenerationStage::BuildingImages);
            let bundle = self.classifier.classify(&request.description);
            let outcome = self.images.build(&request.description, &bundle).await;
            debug!(
                source = ?outcome.source,
                fallback_set = outcome.fallback_set,
                "Image set ready"
            );
            (Some(outcome.images), outcome.source)
        } else {
            (None, ImageSource::Omitted)
        };

        stages.advance(GenerationStage::BuildingPrompt);
        let prompt = self
            .prompts
            .build(&request.description, images.as_ref(), &request.features);

        stages.advance(GenerationStage::GeneratingText);
        let generation = match self.text.generate(prompt.as_str()).await {
            Some(generation) => generation,
            None => {
                stages.fail("text generation exhausted");
                return Err(GenerationError::TextGenerationExhausted);
            }
        };

        stages.advance(GenerationStage::ExtractingHtml);
        let html = self.extractor.extract(&generation.content);
        if html.is_empty() {
            stages.fail("extracted HTML was empty");
            return Err(GenerationError::ExtractionEmpty);
        }

        stages.advance(GenerationStage::EnforcingPolicy);
        let html = self
            .policy
            .enforce(&html, &request.features, request.image_choice);
        if html.trim().is_empty() {
            stages.fail("policy enforcement left an empty document");
            return Err(GenerationError::ExtractionEmpty);
        }

        stages.advance(GenerationStage::Succeeded);
        info!(
            provider = generation.provider,
            image_source = ?image_source,
            html_len = html.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Site generated"
        );

        Ok(GeneratedSite {
            html,
            stages: stages.into_history(),
            text_provider: generation.provider,
            image_source,
        })
    }

    /// Run one request under a wall-clock ceiling. On expiry the in-flight
    /// work is dropped and no partial result is returned.
    pub async fn generate_within(
        &self,
        request: &GenerationRequest,
        ceiling: Duration,
    ) -> Result<GeneratedSite, GenerationError> {
        match tokio::time::timeout(ceiling, self.generate(request)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::TimedOut(ceiling.as_secs())),
        }
    }
}
