// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request and result values for one site generation

use serde::{Deserialize, Serialize};

use super::state::GenerationStage;
use crate::imagery::ImageSource;

/// Whether the site should carry images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageChoice {
    #[default]
    Ai,
    None,
}

impl ImageChoice {
    /// Case-insensitive parse; only "none" disables images
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("none") {
            ImageChoice::None
        } else {
            ImageChoice::Ai
        }
    }

    pub fn wants_images(self) -> bool {
        self == ImageChoice::Ai
    }
}

fn default_true() -> bool {
    true
}

/// Optional page features toggled per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteFeatures {
    /// Floating WhatsApp contact button
    #[serde(default = "default_true")]
    pub whatsapp: bool,
}

impl Default for SiteFeatures {
    fn default() -> Self {
        Self { whatsapp: true }
    }
}

/// Input to [`super::Orchestrator::generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub description: String,
    pub image_choice: ImageChoice,
    pub features: SiteFeatures,
}

impl GenerationRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            image_choice: ImageChoice::default(),
            features: SiteFeatures::default(),
        }
    }

    pub fn with_image_choice(mut self, image_choice: ImageChoice) -> Self {
        self.image_choice = image_choice;
        self
    }

    pub fn with_features(mut self, features: SiteFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("description is required".to_string());
        }
        Ok(())
    }
}

/// A finished, policy-compliant site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSite {
    pub html: String,
    /// Stages passed through, in order, ending with `Succeeded`
    pub stages: Vec<GenerationStage>,
    pub text_provider: &'static str,
    pub image_source: ImageSource,
}
