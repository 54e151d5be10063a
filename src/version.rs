// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the Fabstir site generator

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-site-generation-2025-11-03";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-11-03";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "text-provider-fallback",
    "ai-imagery",
    "fallback-imagery",
    "gallery-pacing",
    "whatsapp-policy",
    "no-image-policy",
    "malay-detection",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Fabstir Site Generator {} ({})", VERSION_NUMBER, BUILD_DATE)
}
