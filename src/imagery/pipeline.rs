// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image set assembly: AI generation with an all-or-nothing fallback

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::fallback::FallbackImageLibrary;
use super::pacing::ImageCallPacer;
use super::provider::ImageProvider;
use super::{ImageSet, ImageSource};
use crate::classifier::ImagePromptBundle;
use crate::config::{DEFAULT_MIN_GALLERY_IMAGES, GALLERY_SIZE};

/// Result of building images for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOutcome {
    pub images: ImageSet,
    pub source: ImageSource,
    /// Name of the fallback set that seeded the request
    pub fallback_set: &'static str,
}

/// Builds the image set for a request
pub struct ImagePipeline {
    provider: Option<Arc<dyn ImageProvider>>,
    fallback: FallbackImageLibrary,
    gallery_delay: Duration,
    min_gallery_images: usize,
}

impl ImagePipeline {
    pub fn new(provider: Option<Arc<dyn ImageProvider>>, gallery_delay: Duration) -> Self {
        Self {
            provider,
            fallback: FallbackImageLibrary::new(),
            gallery_delay,
            min_gallery_images: DEFAULT_MIN_GALLERY_IMAGES,
        }
    }

    /// Override the gallery acceptance threshold (clamped to the gallery size)
    pub fn with_min_gallery_images(mut self, min: usize) -> Self {
        self.min_gallery_images = min.min(GALLERY_SIZE);
        self
    }

    pub fn min_gallery_images(&self) -> usize {
        self.min_gallery_images
    }

    /// Whether a usable image provider is configured
    pub fn has_provider(&self) -> bool {
        self.provider.as_ref().is_some_and(|p| p.is_available())
    }

    /// Seed with a fallback set, then try a full AI set. A generated set is
    /// kept only when the hero and at least `min_gallery_images` gallery
    /// images succeed; otherwise the whole seed set is returned unchanged.
    pub async fn build(&self, description: &str, prompts: &ImagePromptBundle) -> ImageOutcome {
        let (fallback_set, seed) = self.fallback.select(description);
        let fallback = |reason: &str| {
            debug!(fallback_set, reason, "Using fallback image set");
            ImageOutcome {
                images: seed.clone(),
                source: ImageSource::Fallback,
                fallback_set,
            }
        };

        let provider = match &self.provider {
            Some(p) if p.is_available() => p,
            _ => return fallback("no image provider configured"),
        };

        let start = Instant::now();
        let pacer = ImageCallPacer::new(self.gallery_delay);

        pacer.wait().await;
        let hero = match provider.generate(&prompts.hero).await {
            Some(image) => image,
            None => {
                warn!(provider = provider.name(), "Hero image failed, skipping gallery");
                return fallback("hero image failed");
            }
        };

        let mut gallery = Vec::with_capacity(GALLERY_SIZE);
        for (index, prompt) in prompts.gallery.iter().enumerate() {
            pacer.wait().await;
            match provider.generate(prompt).await {
                Some(image) => gallery.push(image.uri),
                None => warn!(provider = provider.name(), index, "Gallery image failed"),
            }
        }

        if gallery.len() < self.min_gallery_images {
            warn!(
                succeeded = gallery.len(),
                required = self.min_gallery_images,
                "Incomplete gallery, discarding generated images"
            );
            return fallback("incomplete gallery");
        }

        info!(
            provider = provider.name(),
            gallery = gallery.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Generated image set accepted"
        );
        ImageOutcome {
            images: ImageSet {
                hero: hero.uri,
                gallery,
            },
            source: ImageSource::Generated,
            fallback_set,
        }
    }
}
