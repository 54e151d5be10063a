// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Generation stage machine

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStage {
    Idle,
    ValidatingInput,
    BuildingImages,
    BuildingPrompt,
    GeneratingText,
    ExtractingHtml,
    EnforcingPolicy,
    Succeeded,
    Failed,
}

impl GenerationStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, GenerationStage::Succeeded | GenerationStage::Failed)
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationStage::Idle => "idle",
            GenerationStage::ValidatingInput => "validating_input",
            GenerationStage::BuildingImages => "building_images",
            GenerationStage::BuildingPrompt => "building_prompt",
            GenerationStage::GeneratingText => "generating_text",
            GenerationStage::ExtractingHtml => "extracting_html",
            GenerationStage::EnforcingPolicy => "enforcing_policy",
            GenerationStage::Succeeded => "succeeded",
            GenerationStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Records the stages of one request. Once terminal, further transitions
/// are ignored.
#[derive(Debug, Clone)]
pub struct StageTracker {
    current: GenerationStage,
    history: Vec<GenerationStage>,
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StageTracker {
    pub fn new() -> Self {
        Self {
            current: GenerationStage::Idle,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> GenerationStage {
        self.current
    }

    pub fn advance(&mut self, next: GenerationStage) {
        if self.current.is_terminal() {
            return;
        }
        debug!(from = %self.current, to = %next, "Generation stage transition");
        self.current = next;
        self.history.push(next);
    }

    pub fn fail(&mut self, reason: &str) {
        if self.current.is_terminal() {
            return;
        }
        warn!(stage = %self.current, reason, "Generation failed");
        self.current = GenerationStage::Failed;
        self.history.push(GenerationStage::Failed);
    }

    pub fn history(&self) -> &[GenerationStage] {
        &self.history
    }

    pub fn into_history(self) -> Vec<GenerationStage> {
        self.history
    }
}
