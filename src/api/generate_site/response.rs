// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Site generation response types

use serde::{Deserialize, Serialize};

/// Name of the only style variant produced
pub const DEFAULT_STYLE: &str = "modern";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleVariant {
    pub style: String,
    pub html: String,
}

/// Success body of POST /v1/sites/generate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateSiteResponse {
    pub success: bool,
    pub html: String,
    pub styles: Vec<StyleVariant>,
}

impl GenerateSiteResponse {
    pub fn new(html: String) -> Self {
        Self {
            success: true,
            styles: vec![StyleVariant {
                style: DEFAULT_STYLE.to_string(),
                html: html.clone(),
            }],
            html,
        }
    }
}
