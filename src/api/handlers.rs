// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::http_server::AppState;
use crate::config::CredentialStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
}

/// Which provider credentials are configured. Diagnostics only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatusResponse {
    pub openai_configured: bool,
    pub anthropic_configured: bool,
    pub stability_configured: bool,
}

impl From<CredentialStatus> for ProviderStatusResponse {
    fn from(status: CredentialStatus) -> Self {
        Self {
            openai_configured: status.openai,
            anthropic_configured: status.anthropic,
            stability_configured: status.stability,
        }
    }
}

/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut issues = Vec::new();
    if !state.orchestrator.has_text_provider() {
        issues.push("no text generation provider configured".to_string());
    }

    if issues.is_empty() {
        Json(HealthResponse {
            status: "healthy".to_string(),
            issues: None,
        })
    } else {
        Json(HealthResponse {
            status: "degraded".to_string(),
            issues: Some(issues),
        })
    }
}

/// GET /v1/sites/status
pub async fn provider_status_handler(
    State(state): State<Arc<AppState>>,
) -> Json<ProviderStatusResponse> {
    Json(state.credentials.into())
}
