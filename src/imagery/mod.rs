// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Website imagery: AI generation with a curated fallback library

pub mod fallback;
pub mod pacing;
pub mod pipeline;
pub mod provider;
pub mod stability;

use serde::Serialize;

pub use fallback::FallbackImageLibrary;
pub use pacing::ImageCallPacer;
pub use pipeline::{ImageOutcome, ImagePipeline};
pub use provider::{GeneratedImage, ImageError, ImageProvider};
pub use stability::StabilityImageProvider;

/// Hero image plus up to four gallery images, each a URL or `data:` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    pub hero: String,
    pub gallery: Vec<String>,
}

impl ImageSet {
    /// All image references, hero first
    pub fn all(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.hero.as_str()).chain(self.gallery.iter().map(String::as_str))
    }
}

/// Where the images of a generated site came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Generated,
    Fallback,
    /// The request asked for no images
    Omitted,
}
