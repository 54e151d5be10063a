// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recover a raw HTML document from a provider response

use regex::Regex;

/// Strips markdown code fences from model output
#[derive(Debug, Clone)]
pub struct HtmlExtractor {
    html_fence: Regex,
    any_fence: Regex,
}

impl HtmlExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            html_fence: Regex::new(r"(?is)```[ \t]*html[ \t]*\r?\n(.*?)```")?,
            any_fence: Regex::new(r"(?s)```[^\n]*\n(.*?)```")?,
        })
    }

    /// Extraction order:
    /// 1. body of the first fence tagged `html`
    /// 2. body of the first fence of any kind
    /// 3. an opening fence that never closes (truncated output) is dropped
    /// 4. otherwise the whole response, trimmed
    pub fn extract(&self, raw: &str) -> String {
        if let Some(body) = self.html_fence.captures(raw).and_then(|c| c.get(1)) {
            return body.as_str().trim().to_string();
        }
        if let Some(body) = self.any_fence.captures(raw).and_then(|c| c.get(1)) {
            return body.as_str().trim().to_string();
        }

        let trimmed = raw.trim();
        if trimmed.starts_with("```") {
            return match trimmed.split_once('\n') {
                Some((_, rest)) => rest.trim().to_string(),
                None => String::new(),
            };
        }
        trimmed.to_string()
    }
}
