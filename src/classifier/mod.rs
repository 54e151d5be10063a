// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Business classification: free-text description to themed image prompts

pub mod rules;

use serde::Serialize;
use tracing::debug;

use crate::config::GALLERY_SIZE;
use rules::{CategoryRule, CATEGORY_RULES, GENERIC_GALLERY, GENERIC_HERO};

/// Category selected for a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessCategory {
    SoftToys,
    Seafood,
    Food,
    Pets,
    Salon,
    Bakery,
    Automotive,
    Florist,
    Generic,
}

/// Hero prompt plus exactly four gallery prompts, produced once per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePromptBundle {
    pub category: BusinessCategory,
    pub hero: String,
    pub gallery: [String; GALLERY_SIZE],
}

impl ImagePromptBundle {
    fn from_rule(rule: &CategoryRule) -> Self {
        Self {
            category: rule.category,
            hero: rule.hero.to_string(),
            gallery: rule.gallery.map(str::to_string),
        }
    }

    fn generic(description: &str) -> Self {
        let fill = |template: &str| template.replace("{description}", description);
        Self {
            category: BusinessCategory::Generic,
            hero: fill(GENERIC_HERO),
            gallery: GENERIC_GALLERY.map(fill),
        }
    }
}

/// Maps descriptions to prompt bundles using the ordered rule table
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessClassifier;

impl BusinessClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a description. First matching rule wins; no match yields a
    /// generic bundle built from the raw description.
    pub fn classify(&self, description: &str) -> ImagePromptBundle {
        let lower = description.to_lowercase();
        let matched = CATEGORY_RULES
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| lower.contains(t)));

        let bundle = match matched {
            Some(rule) => ImagePromptBundle::from_rule(rule),
            None => ImagePromptBundle::generic(description),
        };
        debug!(category = ?bundle.category, "Classified business description");
        bundle
    }
}
