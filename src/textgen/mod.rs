// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML text generation across an ordered chain of chat-completion providers
//!
//! - OpenAI chat completions (primary)
//! - Anthropic messages (secondary)
//! - Graceful degradation when a credential is missing or a call fails

pub mod anthropic;
pub mod chain;
pub mod openai;
pub mod provider;

pub use anthropic::AnthropicTextProvider;
pub use chain::{TextGeneration, TextGenerationChain};
pub use openai::OpenAiTextProvider;
pub use provider::{TextGenError, TextProvider, SYSTEM_PROMPT};
