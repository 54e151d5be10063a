// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_site_handler;
pub use request::GenerateSiteRequest;
pub use response::{GenerateSiteResponse, StyleVariant, DEFAULT_STYLE};
