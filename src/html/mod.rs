// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post-processing of raw model output into the final HTML document

pub mod extractor;
pub mod policy;

pub use extractor::HtmlExtractor;
pub use policy::{PolicyEnforcer, PolicyReport, STOCK_PHOTO_HOSTS};
