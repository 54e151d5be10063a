// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Site generation endpoint handler

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

use super::request::GenerateSiteRequest;
use super::response::GenerateSiteResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /v1/sites/generate - Generate a single-page website
///
/// Pipeline:
/// 1. Reject unparseable bodies and blank descriptions with 400
/// 2. Run the orchestrator under the request ceiling (504 on expiry)
/// 3. Map orchestrator failures to their status and public message
pub async fn generate_site_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateSiteRequest>, JsonRejection>,
) -> Result<Json<GenerateSiteResponse>, ApiError> {
    let Json(request) = body.map_err(|e| {
        warn!("Site generation body rejected: {}", e.body_text());
        ApiError::bad_request("request body must be JSON with a description")
    })?;

    if let Err(e) = request.validate() {
        warn!("Site generation validation failed: {}", e);
        return Err(ApiError::bad_request(e));
    }
    let request = request
        .into_generation_request()
        .map_err(ApiError::bad_request)?;

    let request_id = Uuid::new_v4();
    let span = info_span!("generate_site", %request_id);
    async move {
        debug!(
            description_len = request.description.len(),
            image_choice = ?request.image_choice,
            whatsapp = request.features.whatsapp,
            "Site generation request received"
        );

        let site = state
            .orchestrator
            .generate_within(&request, state.request_timeout)
            .await
            .map_err(ApiError::from)?;

        Ok::<_, ApiError>(Json(GenerateSiteResponse::new(site.html)))
    }
    .instrument(span)
    .await
}
