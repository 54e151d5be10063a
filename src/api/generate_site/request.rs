// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Site generation request body and validation

use serde::{Deserialize, Serialize};

use crate::orchestrator::{GenerationRequest, ImageChoice, SiteFeatures};

/// Body of POST /v1/sites/generate
///
/// `description` and `business_description` are accepted interchangeably;
/// when both are present the first non-blank one wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateSiteRequest {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub business_description: Option<String>,

    /// "ai" or "none"; anything else, or absent, means "ai"
    #[serde(default)]
    pub image_choice: Option<String>,

    #[serde(default)]
    pub features: SiteFeatures,
}

impl GenerateSiteRequest {
    fn description(&self) -> Option<&str> {
        [&self.description, &self.business_description]
            .into_iter()
            .flatten()
            .map(|d| d.trim())
            .find(|d| !d.is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.description().is_none() {
            return Err("description is required".to_string());
        }
        Ok(())
    }

    /// Convert to the orchestrator's request
    pub fn into_generation_request(self) -> Result<GenerationRequest, String> {
        let description = self
            .description()
            .ok_or_else(|| "description is required".to_string())?
            .to_string();
        let image_choice = self
            .image_choice
            .as_deref()
            .map(ImageChoice::parse)
            .unwrap_or_default();

        Ok(GenerationRequest::new(description)
            .with_image_choice(image_choice)
            .with_features(self.features))
    }
}
