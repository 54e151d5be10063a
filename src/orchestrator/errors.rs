// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use thiserror::Error;

/// Public message shared by every failure that happens after the request
/// was accepted
pub const GENERATION_FAILED: &str = "generation failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no text generation provider is configured")]
    NoTextProviderConfigured,

    #[error("all text generation providers failed")]
    TextGenerationExhausted,

    #[error("extracted HTML was empty")]
    ExtractionEmpty,

    #[error("generation timed out after {0}s")]
    TimedOut(u64),
}

impl GenerationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GenerationError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GenerationError::NoTextProviderConfigured
            | GenerationError::TextGenerationExhausted
            | GenerationError::ExtractionEmpty => StatusCode::INTERNAL_SERVER_ERROR,
            GenerationError::TimedOut(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Message safe to return to callers
    pub fn public_message(&self) -> String {
        match self {
            GenerationError::InvalidRequest(msg) => msg.clone(),
            GenerationError::NoTextProviderConfigured => {
                "no text generation provider is configured".to_string()
            }
            GenerationError::TextGenerationExhausted | GenerationError::ExtractionEmpty => {
                GENERATION_FAILED.to_string()
            }
            GenerationError::TimedOut(_) => "generation timed out".to_string(),
        }
    }
}
