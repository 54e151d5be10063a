// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAI chat completions provider (primary)

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::provider::{TextGenError, TextProvider, SYSTEM_PROMPT};

/// OpenAI-compatible chat completions client
pub struct OpenAiTextProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// First choice content, rejecting blank output
    pub(crate) fn into_content(self) -> Result<String, TextGenError> {
        let content = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TextGenError::MalformedResponse("no choices".to_string()))?
            .message
            .content
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(TextGenError::EmptyResponse);
        }
        Ok(content)
    }
}

impl OpenAiTextProvider {
    pub fn new(
        api_key: String,
        base_url: &str,
        model: &str,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        debug!("OpenAI text provider configured: endpoint={}, model={}", endpoint, model);

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

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: 0.7,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
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

        let data: ChatResponse = response.json().await?;
        data.into_content()
    }
}

#[async_trait]
impl TextProvider for OpenAiTextProvider {
    async fn attempt(&self, prompt: &str) -> Option<String> {
        match self.complete(prompt).await {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("OpenAI text generation failed: {}", e);
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "openai"
    }

    fn is_available(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
