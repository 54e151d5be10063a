// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::generate_site::generate_site_handler;
use super::handlers::{health_handler, provider_status_handler};
use crate::config::{CredentialStatus, SiteGenConfig};
use crate::orchestrator::Orchestrator;

/// Shared, read-only state for every route
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub credentials: CredentialStatus,
    /// Wall-clock ceiling for one generation request
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(orchestrator: Arc<Orchestrator>, config: &SiteGenConfig) -> Self {
        Self {
            orchestrator,
            credentials: config.credential_status(),
            request_timeout: config.request_timeout(),
        }
    }

    pub fn from_config(config: &SiteGenConfig) -> Result<Self> {
        let orchestrator = Orchestrator::from_config(config)?;
        Ok(Self::new(Arc::new(orchestrator), config))
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/sites/status", get(provider_status_handler))
        .route("/v1/sites/generate", post(generate_site_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: SiteGenConfig) -> Result<()> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Site generation API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
