// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the website generation service
//!
//! Every provider credential is independently optional. A missing key disables
//! that provider only: text generation degrades across its two providers and
//! image generation degrades to the bundled fallback library.

use std::env;
use std::time::Duration;

use url::Url;

/// Default number of gallery images that must succeed for an AI image set to be kept
pub const DEFAULT_MIN_GALLERY_IMAGES: usize = 3;

/// Number of gallery prompts produced per request
pub const GALLERY_SIZE: usize = 4;

/// Top-level service configuration
#[derive(Debug, Clone)]
pub struct SiteGenConfig {
    /// Provider credentials
    pub providers: ProviderKeys,
    /// Primary text provider (OpenAI chat completions)
    pub openai: TextBackendConfig,
    /// Secondary text provider (Anthropic messages)
    pub anthropic: TextBackendConfig,
    /// Image provider (Stability AI text-to-image)
    pub stability: ImageBackendConfig,
    /// Output token ceiling sent to text providers
    pub max_output_tokens: u32,
    /// Per-call timeout for text providers in seconds
    pub text_timeout_secs: u64,
    /// Per-call timeout for the image provider in seconds
    pub image_timeout_secs: u64,
    /// Fixed delay between consecutive image calls in milliseconds
    pub gallery_delay_ms: u64,
    /// Gallery images required before an AI image set is accepted
    pub min_gallery_images: usize,
    /// Phone number bound to the floating WhatsApp button
    pub whatsapp_number: String,
    /// Wall-clock ceiling for a whole generation request in seconds
    pub request_timeout_secs: u64,
    /// HTTP bind host
    pub api_host: String,
    /// HTTP bind port
    pub api_port: u16,
}

/// Provider API keys
#[derive(Debug, Clone, Default)]
pub struct ProviderKeys {
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub stability_api_key: Option<String>,
}

/// Text backend settings
#[derive(Debug, Clone)]
pub struct TextBackendConfig {
    pub model: String,
    pub base_url: String,
}

/// Image backend settings
#[derive(Debug, Clone)]
pub struct ImageBackendConfig {
    pub engine: String,
    pub base_url: String,
}

/// Which credentials are present, as reported by the status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialStatus {
    pub openai: bool,
    pub anthropic: bool,
    pub stability: bool,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_key(name: &str) -> Option<String> {
    non_empty(env::var(name).ok())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl ProviderKeys {
    pub fn status(&self) -> CredentialStatus {
        CredentialStatus {
            openai: non_empty(self.openai_api_key.clone()).is_some(),
            anthropic: non_empty(self.anthropic_api_key.clone()).is_some(),
            stability: non_empty(self.stability_api_key.clone()).is_some(),
        }
    }
}

impl SiteGenConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            providers: ProviderKeys {
                openai_api_key: env_key("OPENAI_API_KEY"),
                anthropic_api_key: env_key("ANTHROPIC_API_KEY"),
                stability_api_key: env_key("STABILITY_API_KEY"),
            },
            openai: TextBackendConfig {
                model: env::var("OPENAI_MODEL").unwrap_or(defaults.openai.model),
                base_url: env::var("OPENAI_BASE_URL").unwrap_or(defaults.openai.base_url),
            },
            anthropic: TextBackendConfig {
                model: env::var("ANTHROPIC_MODEL").unwrap_or(defaults.anthropic.model),
                base_url: env::var("ANTHROPIC_BASE_URL").unwrap_or(defaults.anthropic.base_url),
            },
            stability: ImageBackendConfig {
                engine: env::var("STABILITY_ENGINE").unwrap_or(defaults.stability.engine),
                base_url: env::var("STABILITY_BASE_URL").unwrap_or(defaults.stability.base_url),
            },
            max_output_tokens: env_parse("SITEGEN_MAX_TOKENS", defaults.max_output_tokens),
            text_timeout_secs: env_parse("TEXT_PROVIDER_TIMEOUT_SECS", defaults.text_timeout_secs),
            image_timeout_secs: env_parse(
                "IMAGE_PROVIDER_TIMEOUT_SECS",
                defaults.image_timeout_secs,
            ),
            gallery_delay_ms: env_parse("GALLERY_DELAY_MS", defaults.gallery_delay_ms),
            min_gallery_images: env_parse("MIN_GALLERY_IMAGES", defaults.min_gallery_images),
            whatsapp_number: env::var("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            api_host: env::var("API_HOST").unwrap_or(defaults.api_host),
            api_port: env_parse("API_PORT", defaults.api_port),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, raw) in [
            ("OPENAI_BASE_URL", &self.openai.base_url),
            ("ANTHROPIC_BASE_URL", &self.anthropic.base_url),
            ("STABILITY_BASE_URL", &self.stability.base_url),
        ] {
            Url::parse(raw).map_err(|e| format!("{} is not a valid URL ({}): {}", name, raw, e))?;
        }
        if self.min_gallery_images > GALLERY_SIZE {
            return Err(format!(
                "min_gallery_images must be at most {}, got {}",
                GALLERY_SIZE, self.min_gallery_images
            ));
        }
        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.whatsapp_number.trim().is_empty() {
            return Err("whatsapp_number must not be empty".to_string());
        }
        Ok(())
    }

    /// Check whether at least one text provider credential is present
    pub fn has_text_provider(&self) -> bool {
        let status = self.credential_status();
        status.openai || status.anthropic
    }

    pub fn credential_status(&self) -> CredentialStatus {
        self.providers.status()
    }

    pub fn gallery_delay(&self) -> Duration {
        Duration::from_millis(self.gallery_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

impl Default for SiteGenConfig {
    fn default() -> Self {
        Self {
            providers: ProviderKeys::default(),
            openai: TextBackendConfig {
                model: "gpt-4o-mini".to_string(),
                base_url: "https://api.openai.com/v1".to_string(),
            },
            anthropic: TextBackendConfig {
                model: "claude-3-5-sonnet-latest".to_string(),
                base_url: "https://api.anthropic.com/v1".to_string(),
            },
            stability: ImageBackendConfig {
                engine: "stable-diffusion-xl-1024-v1-0".to_string(),
                base_url: "https://api.stability.ai".to_string(),
            },
            max_output_tokens: 8000,
            text_timeout_secs: 100,
            image_timeout_secs: 60,
            gallery_delay_ms: 1000,
            min_gallery_images: DEFAULT_MIN_GALLERY_IMAGES,
            whatsapp_number: "60123456789".to_string(),
            request_timeout_secs: 120,
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
        }
    }
}
