// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Anthropic messages provider (secondary)

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::provider::{TextGenError, TextProvider, SYSTEM_PROMPT};

/// Anthropic API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API client
pub struct AnthropicTextProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'static str,
    messages: Vec<UserMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    /// Concatenate all text blocks, rejecting blank output
    pub(crate) fn into_content(self) -> Result<String, TextGenError> {
        if self.content.is_empty() {
            return Err(TextGenError::MalformedResponse("no content blocks".to_string()));
        }
        let text: String = self
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect();
        if text.trim().is_empty() {
            return Err(TextGenError::EmptyResponse);
        }
        Ok(text)
    }
}

impl AnthropicTextProvider {
    pub fn new(
        api_key: String,
        base_url: &str,
        model: &str,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}/messages", base_url.trim_end_matches('/'));
        debug!("Anthropic text provider configured: endpoint={}, model={}", endpoint, model);

        Ok(Self {
            client,
            api_key,
            endpoint,
            model: model.to_string(),
            max_tokens,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, TextGenError> {
        if self.api_key.trim().is_empty() {
            return Err(TextGenError::NoApiKey {
                provider: self.name().to_string(),
            });
        }

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: SYSTEM_PROMPT,
            messages: vec![UserMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TextGenError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: MessagesResponse = response.json().await?;
        data.into_content()
    }
}

#[async_trait]
impl TextProvider for AnthropicTextProvider {
    async fn attempt(&self, prompt: &str) -> Option<String> {
        match self.complete(prompt).await {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("Anthropic text generation failed: {}", e);
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn is_available(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
