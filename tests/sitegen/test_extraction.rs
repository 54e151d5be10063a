// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Extraction is idempotent: extract(extract(x)) == extract(x)

use fabstir_sitegen::html::HtmlExtractor;

const SAMPLES: &[&str] = &[
    "<!DOCTYPE html><html><body>plain</body></html>",
    "Sure! Here is your site:\n```html\n<!DOCTYPE html>\n<html></html>\n```\nLet me know.",
    "```\n<html><body>untagged</body></html>\n```",
    "```html\n<html><body>truncated",
    "   \n\n  ",
    "",
    "```css\nbody { color: red; }\n```",
    "no fences at all, just prose",
];

#[test]
fn test_extraction_is_idempotent() {
    let extractor = HtmlExtractor::new().unwrap();
    for raw in SAMPLES {
        let once = extractor.extract(raw);
        let twice = extractor.extract(&once);
        assert_eq!(once, twice, "not idempotent for {:?}", raw);
    }
}

#[test]
fn test_fenced_document_is_unwrapped() {
    let extractor = HtmlExtractor::new().unwrap();
    assert_eq!(
        extractor.extract(SAMPLES[1]),
        "<!DOCTYPE html>\n<html></html>"
    );
}

#[test]
fn test_whitespace_only_extracts_to_empty() {
    let extractor = HtmlExtractor::new().unwrap();
    assert_eq!(extractor.extract(SAMPLES[4]), "");
}
