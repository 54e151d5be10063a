// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod generate_site;
pub mod handlers;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use generate_site::{GenerateSiteRequest, GenerateSiteResponse};
pub use handlers::{HealthResponse, ProviderStatusResponse};
pub use http_server::{create_app, start_server, AppState};
