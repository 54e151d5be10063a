// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post-generation feature policy enforcement
//!
//! The prompt asks the model to honour feature flags but the output is not
//! trusted. These rewrites run after every generation and guarantee that the
//! literal markers of a disabled feature are absent. They are pattern-based
//! text rewrites, not an HTML sanitiser: malformed or adversarial markup may
//! end up mangled, but never still containing the markers below.

use regex::Regex;
use tracing::debug;

use crate::orchestrator::{ImageChoice, SiteFeatures};

/// Hosts whose URLs are removed when a site is generated without images
pub const STOCK_PHOTO_HOSTS: &[&str] = &[
    "unsplash.com",
    "pexels.com",
    "pixabay.com",
    "picsum.photos",
    "placehold.co",
    "placeholder.com",
    "placekitten.com",
    "loremflickr.com",
    "shutterstock.com",
    "istockphoto.com",
    "gettyimages.com",
];

/// Counts of rewrites applied to one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyReport {
    pub whatsapp_anchors_removed: usize,
    pub whatsapp_links_neutralized: usize,
    pub img_tags_removed: usize,
    pub background_images_removed: usize,
    pub stock_urls_removed: usize,
}

impl PolicyReport {
    pub fn total(&self) -> usize {
        self.whatsapp_anchors_removed
            + self.whatsapp_links_neutralized
            + self.img_tags_removed
            + self.background_images_removed
            + self.stock_urls_removed
    }
}

/// Deterministic rewrite rules for disabled features
#[derive(Debug, Clone)]
pub struct PolicyEnforcer {
    anchor: Regex,
    whatsapp_marker: Regex,
    whatsapp_href_double: Regex,
    whatsapp_href_single: Regex,
    whatsapp_url: Regex,
    img_tag: Regex,
    img_close: Regex,
    source_srcset: Regex,
    background_image: Regex,
    background_shorthand_url: Regex,
    tailwind_bg_url: Regex,
    stock_url: Regex,
}

impl PolicyEnforcer {
    pub fn new() -> Result<Self, regex::Error> {
        let hosts = STOCK_PHOTO_HOSTS
            .iter()
            .map(|h| regex::escape(h))
            .collect::<Vec<_>>()
            .join("|");
        let css_url = r#"url\(\s*(?:"[^"]*"|'[^']*'|[^)"']*)\s*\)"#;

        Ok(Self {
            anchor: Regex::new(r"(?is)<a\b[^>]*>.*?</a\s*>")?,
            whatsapp_marker: Regex::new(r"(?i)wa\.me|whatsapp")?,
            whatsapp_href_double: Regex::new(r#"(?i)href\s*=\s*"[^"]*(?:wa\.me|whatsapp)[^"]*""#)?,
            whatsapp_href_single: Regex::new(r"(?i)href\s*=\s*'[^']*(?:wa\.me|whatsapp)[^']*'")?,
            whatsapp_url: Regex::new(
                r#"(?i)(?:(?:https?:)?//(?:wa\.me|(?:[a-z0-9-]+\.)*whatsapp\.com)|whatsapp:)[^\s"'<>)]*"#,
            )?,
            img_tag: Regex::new(r"(?is)<img\b[^>]*>")?,
            img_close: Regex::new(r"(?i)</img\s*>")?,
            source_srcset: Regex::new(r"(?is)<source\b[^>]*\bsrcset\b[^>]*>")?,
            background_image: Regex::new(&format!(
                r#"(?i)background-image\s*:\s*(?:{}|[^;"'}}])*;?"#,
                css_url
            ))?,
            background_shorthand_url: Regex::new(&format!(
                r#"(?i)(background\s*:[^;"'{{}}]*?){}"#,
                css_url
            ))?,
            tailwind_bg_url: Regex::new(r"bg-\[url\([^\]]*\)\]")?,
            stock_url: Regex::new(&format!(
                r#"(?i)(?:https?:)?//(?:[a-z0-9-]+\.)*(?:{})[^\s"'<>)]*"#,
                hosts
            ))?,
        })
    }

    /// Apply every rule for the disabled features of a request
    pub fn enforce(&self, html: &str, features: &SiteFeatures, image_choice: ImageChoice) -> String {
        self.enforce_with_report(html, features, image_choice).0
    }

    pub fn enforce_with_report(
        &self,
        html: &str,
        features: &SiteFeatures,
        image_choice: ImageChoice,
    ) -> (String, PolicyReport) {
        let mut report = PolicyReport::default();
        let mut out = html.to_string();
        let mut passes = 0usize;

        // Removing one match can splice its neighbours into a new marker, so
        // rules repeat until a pass changes nothing. Every rule shortens the
        // document, which bounds the loop by the input length.
        loop {
            let mut next = out.clone();
            if !features.whatsapp {
                next = self.strip_whatsapp(&next, &mut report);
            }
            if image_choice == ImageChoice::None {
                next = self.strip_images(&next, &mut report);
            }
            passes += 1;
            if next == out {
                break;
            }
            out = next;
        }

        if report.total() > 0 {
            debug!(?report, passes, "Policy rewrites applied to generated HTML");
        }
        (out, report)
    }

    fn strip_whatsapp(&self, html: &str, report: &mut PolicyReport) -> String {
        let out = self.anchor.replace_all(html, |caps: &regex::Captures| {
            let anchor = &caps[0];
            if self.whatsapp_marker.is_match(anchor) {
                report.whatsapp_anchors_removed += 1;
                String::new()
            } else {
                anchor.to_string()
            }
        });

        let mut out = out.into_owned();
        for re in [&self.whatsapp_href_double, &self.whatsapp_href_single] {
            report.whatsapp_links_neutralized += re.find_iter(&out).count();
            out = re.replace_all(&out, r##"href="#""##).into_owned();
        }
        report.whatsapp_links_neutralized += self.whatsapp_url.find_iter(&out).count();
        self.whatsapp_url.replace_all(&out, "#").into_owned()
    }

    fn strip_images(&self, html: &str, report: &mut PolicyReport) -> String {
        report.img_tags_removed += self.img_tag.find_iter(html).count();
        let mut out = self.img_tag.replace_all(html, "").into_owned();
        out = self.img_close.replace_all(&out, "").into_owned();
        out = self.source_srcset.replace_all(&out, "").into_owned();

        report.background_images_removed += self.background_image.find_iter(&out).count();
        out = self.background_image.replace_all(&out, "").into_owned();

        // One url() per shorthand declaration per pass
        report.background_images_removed += self.background_shorthand_url.find_iter(&out).count();
        out = self
            .background_shorthand_url
            .replace_all(&out, "${1}none")
            .into_owned();

        report.background_images_removed += self.tailwind_bg_url.find_iter(&out).count();
        out = self.tailwind_bg_url.replace_all(&out, "").into_owned();

        report.stock_urls_removed += self.stock_url.find_iter(&out).count();
        self.stock_url.replace_all(&out, "").into_owned()
    }
}
