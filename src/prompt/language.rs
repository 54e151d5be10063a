// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Output language detection for generated website copy

/// Language the generated copy should be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Malay,
    Other,
}

/// Common Malay words that rarely occur in English business descriptions
const MALAY_MARKERS: &[&str] = &[
    "kedai", "jual", "menjual", "jualan", "saya", "kami", "kita", "dan", "untuk", "yang",
    "dengan", "di", "ini", "itu", "perniagaan", "syarikat", "perkhidmatan", "pelanggan",
    "harga", "murah", "sedap", "terbaik", "makanan", "kucing", "ikan", "kek", "roti",
    "bunga", "kereta", "rumah", "baju", "menyediakan", "pelbagai",
];

/// Detect whether a description is written in Malay (word match, not substring)
pub fn detect_language(description: &str) -> Language {
    let lower = description.to_lowercase();
    let is_malay = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .any(|w| MALAY_MARKERS.contains(&w));
    if is_malay {
        Language::Malay
    } else {
        Language::Other
    }
}
