// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ordered text provider fallback chain
//!
//! Providers are tried strictly in the order given. A provider without a
//! credential is skipped, a failing provider advances to the next one, and
//! no provider is called more than once per request.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::provider::TextProvider;

/// Output of a successful chain run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGeneration {
    /// Name of the provider that answered
    pub provider: &'static str,
    pub content: String,
}

/// Ordered list of text providers behind one interface
pub struct TextGenerationChain {
    providers: Vec<Arc<dyn TextProvider>>,
}

impl TextGenerationChain {
    /// Create a chain; the vector order is the attempt order
    pub fn new(providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self { providers }
    }

    /// Whether any provider has a credential
    pub fn is_configured(&self) -> bool {
        self.providers.iter().any(|p| p.is_available())
    }

    /// Names of providers with a credential, in attempt order
    pub fn available_providers(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.name())
            .collect()
    }

    /// Return the first non-empty provider response, or `None` when every
    /// configured provider failed or none is configured
    pub async fn generate(&self, prompt: &str) -> Option<TextGeneration> {
        for provider in &self.providers {
            if !provider.is_available() {
                debug!("Skipping text provider {}: not configured", provider.name());
                continue;
            }

            debug!("Trying text provider: {}", provider.name());
            let start = Instant::now();

            match provider.attempt(prompt).await {
                Some(content) if !content.trim().is_empty() => {
                    info!(
                        "Text generation complete: {} chars from {} in {}ms",
                        content.len(),
                        provider.name(),
                        start.elapsed().as_millis()
                    );
                    return Some(TextGeneration {
                        provider: provider.name(),
                        content,
                    });
                }
                Some(_) => {
                    warn!("Text provider {} returned empty content, trying next", provider.name());
                }
                None => {
                    warn!("Text provider {} failed, trying next", provider.name());
                }
            }
        }

        warn!("All text providers failed or none configured");
        None
    }
}
