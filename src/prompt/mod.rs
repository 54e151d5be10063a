// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML generation prompt assembly
//!
//! The prompt is built fresh per request and per call: description, the image
//! clause (exact URLs or an explicit "no images" directive), the WhatsApp
//! clause and the section list.

pub mod language;

use std::fmt;

use crate::imagery::ImageSet;
use crate::orchestrator::SiteFeatures;
pub use language::{detect_language, Language};

/// Tailwind CSS play CDN, loaded by every generated page
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Fully assembled prompt for the text generation chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPrompt(String);

impl GenerationPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GenerationPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assembles the website generation prompt
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    whatsapp_number: String,
}

impl PromptBuilder {
    pub fn new(whatsapp_number: impl Into<String>) -> Self {
        Self {
            whatsapp_number: whatsapp_number.into(),
        }
    }

    pub fn whatsapp_number(&self) -> &str {
        &self.whatsapp_number
    }

    /// Build the prompt. `images` is `None` when the request asked for no images.
    pub fn build(
        &self,
        description: &str,
        images: Option<&ImageSet>,
        features: &SiteFeatures,
    ) -> GenerationPrompt {
        let language = match detect_language(description) {
            Language::Malay => {
                "Write ALL website copy (headings, paragraphs, buttons, footer) in Bahasa Melayu."
            }
            Language::Other => {
                "Write ALL website copy in the same language as the business description."
            }
        };

        let mut prompt = String::new();
        prompt.push_str(
            "You are an expert web designer. Create a complete, modern, single-page website \
             for the following business.\n\n",
        );
        prompt.push_str(&format!("Business description:\n{}\n\n", description.trim()));

        prompt.push_str("Technical requirements:\n");
        prompt.push_str(
            "- Return ONE self-contained HTML document, starting with <!DOCTYPE html> and ending with </html>.\n",
        );
        prompt.push_str(&format!(
            "- Use Tailwind CSS loaded via CDN: <script src=\"{}\"></script>. No other CSS frameworks.\n",
            TAILWIND_CDN
        ));
        prompt.push_str("- The layout must be fully mobile-responsive.\n");
        prompt.push_str(&format!("- {}\n\n", language));

        prompt.push_str(&image_clause(images));
        prompt.push('\n');
        prompt.push_str(&self.whatsapp_clause(features.whatsapp));
        prompt.push('\n');
        prompt.push_str(&section_list(images.is_some()));
        prompt.push_str(
            "\nReturn only the HTML document. Do not add explanations before or after it.\n",
        );

        GenerationPrompt(prompt)
    }

    fn whatsapp_clause(&self, enabled: bool) -> String {
        if enabled {
            format!(
                "WhatsApp:\n\
                 - Add a floating WhatsApp contact button fixed to the bottom-right corner.\n\
                 - It must link to https://wa.me/{} and stay visible while scrolling.\n",
                self.whatsapp_number
            )
        } else {
            "WhatsApp:\n\
             - Do NOT include any WhatsApp button, link, icon or wa.me URL anywhere on the page.\n"
                .to_string()
        }
    }
}

fn image_clause(images: Option<&ImageSet>) -> String {
    match images {
        None => "Images:\n\
                 - Do NOT use any <img> tags.\n\
                 - Do NOT use background-image CSS or url() backgrounds.\n\
                 - Do NOT reference stock photo URLs (Unsplash, Pexels, Pixabay or similar).\n\
                 - Use colour, gradients, typography and icons made from text or inline SVG instead.\n"
            .to_string(),
        Some(set) => {
            let mut clause = String::from(
                "Images:\n- You MUST use these exact image URLs verbatim. Do not change, shorten or replace them, \
                 and do not add any other image URLs.\n",
            );
            clause.push_str(&format!("- Hero image: {}\n", set.hero));
            for (index, uri) in set.gallery.iter().enumerate() {
                clause.push_str(&format!("- Gallery image {}: {}\n", index + 1, uri));
            }
            clause
        }
    }
}

fn section_list(with_gallery: bool) -> String {
    let mut sections = vec![
        "Navigation bar with the business name",
        "Hero section with a headline, short tagline and call-to-action button",
        "About section",
        "Products or services section with 3-6 cards",
    ];
    if with_gallery {
        sections.push("Gallery section showing the gallery images in a responsive grid");
    }
    sections.extend([
        "Testimonials section",
        "Contact section with address, phone and opening hours placeholders",
        "Footer",
    ]);

    let mut list = String::from("Sections, in this order:\n");
    for (index, section) in sections.iter().enumerate() {
        list.push_str(&format!("{}. {}\n", index + 1, section));
    }
    list
}
