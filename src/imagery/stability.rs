// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stability AI text-to-image provider
//!
//! Uses a fixed generation configuration for every call: landscape aspect
//! ratio, the photographic style preset and a negative prompt that keeps
//! illustration and cartoon styles out of website imagery.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use super::provider::{GeneratedImage, ImageError, ImageProvider};

/// Output width; with `HEIGHT` gives the fixed 7:4 landscape ratio
pub const WIDTH: u32 = 1344;
pub const HEIGHT: u32 = 768;

pub const STYLE_PRESET: &str = "photographic";

pub const NEGATIVE_PROMPT: &str =
    "cartoon, illustration, anime, drawing, painting, 3d render, sketch, text, watermark, logo, blurry, deformed";

/// Stability AI text-to-image client
pub struct StabilityImageProvider {
    client: Client,
    api_key: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct TextPrompt<'a> {
    text: &'a str,
    weight: f32,
}

#[derive(Debug, Serialize)]
struct TextToImageBody<'a> {
    text_prompts: Vec<TextPrompt<'a>>,
    cfg_scale: u32,
    width: u32,
    height: u32,
    samples: u32,
    steps: u32,
    style_preset: &'static str,
}

impl StabilityImageProvider {
    /// Create a new provider
    ///
    /// # Arguments
    /// * `api_key` - Stability API key
    /// * `base_url` - API root, e.g. `https://api.stability.ai`
    /// * `engine` - engine id used in the generation path
    /// * `timeout` - per-call timeout
    pub fn new(api_key: String, base_url: &str, engine: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!(
            "{}/v1/generation/{}/text-to-image",
            base_url.trim_end_matches('/'),
            engine
        );
        debug!("Stability image provider configured: endpoint={}", endpoint);

        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    fn request_body(prompt: &str) -> TextToImageBody<'_> {
        TextToImageBody {
            text_prompts: vec![
                TextPrompt {
                    text: prompt,
                    weight: 1.0,
                },
                TextPrompt {
                    text: NEGATIVE_PROMPT,
                    weight: -1.0,
                },
            ],
            cfg_scale: 7,
            width: WIDTH,
            height: HEIGHT,
            samples: 1,
            steps: 30,
            style_preset: STYLE_PRESET,
        }
    }

    async fn request_image(&self, prompt: &str) -> Result<GeneratedImage, ImageError> {
        if self.api_key.trim().is_empty() {
            return Err(ImageError::NoApiKey {
                provider: self.name().to_string(),
            });
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "image/png")
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| ImageError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ImageError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::Transport(e.to_string()))?;
        if bytes.is_empty() {
            return Err(ImageError::EmptyImage);
        }

        Ok(GeneratedImage {
            uri: png_data_uri(&bytes),
        })
    }
}

/// Encode PNG bytes as an inline `data:` URI
pub fn png_data_uri(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(bytes))
}

#[async_trait]
impl ImageProvider for StabilityImageProvider {
    async fn generate(&self, prompt: &str) -> Option<GeneratedImage> {
        match self.request_image(prompt).await {
            Ok(image) => {
                debug!(bytes = image.uri.len(), "Stability image generated");
                Some(image)
            }
            Err(e) => {
                warn!("Stability image generation failed: {}", e);
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "stability"
    }

    fn is_available(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
