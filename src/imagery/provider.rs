// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image provider trait definition

use async_trait::async_trait;
use thiserror::Error;

/// A single generated image, ready to embed in markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// `data:` URI or remote URL
    pub uri: String,
}

/// Errors from a single image generation call. Always soft: the pipeline
/// recovers from every variant with the fallback library.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("No API key configured for {provider}")]
    NoApiKey { provider: String },

    #[error("Image API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Image request failed: {0}")]
    Transport(String),

    #[error("Image provider returned an empty body")]
    EmptyImage,
}

/// Text-to-image backend
///
/// `generate` never fails: any error is logged by the implementation and
/// reported as `None`, which the caller treats as "unavailable".
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Option<GeneratedImage>;

    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Whether a credential is configured
    fn is_available(&self) -> bool;
}
