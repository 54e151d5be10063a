// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod html;
pub mod imagery;
pub mod orchestrator;
pub mod prompt;
pub mod textgen;
pub mod version;

pub use classifier::{BusinessCategory, BusinessClassifier, ImagePromptBundle};
pub use config::SiteGenConfig;
pub use orchestrator::{
    GeneratedSite, GenerationError, GenerationRequest, ImageChoice, Orchestrator, SiteFeatures,
};
