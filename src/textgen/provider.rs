// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text generation provider trait definition

use async_trait::async_trait;
use thiserror::Error;

/// System instruction shared by every text provider
pub const SYSTEM_PROMPT: &str = "You are a senior front-end developer. You write complete, \
    production-ready single-page websites as one HTML document and follow every instruction \
    about images and contact buttons exactly.";

/// Errors from a single provider call. Never surfaced past the chain.
#[derive(Debug, Error)]
pub enum TextGenError {
    #[error("No API key configured for {provider}")]
    NoApiKey { provider: String },

    #[error("Text API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Text request timed out")]
    Timeout,

    #[error("Text request failed: {0}")]
    Transport(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Provider returned empty content")]
    EmptyResponse,
}

impl From<reqwest::Error> for TextGenError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TextGenError::Timeout
        } else if e.is_decode() {
            TextGenError::MalformedResponse(e.to_string())
        } else {
            TextGenError::Transport(e.to_string())
        }
    }
}

/// A chat-completion backend in the generation chain
///
/// `attempt` makes exactly one call and never fails: errors are logged by the
/// implementation and reported as `None` so the chain can advance.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn attempt(&self, prompt: &str) -> Option<String>;

    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Whether a credential is configured; unavailable providers are skipped
    fn is_available(&self) -> bool;
}
