// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Curated stock image sets used when AI generation is unavailable or incomplete

use super::ImageSet;

/// A named fallback set selected by keyword
pub struct FallbackSet {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub hero: &'static str,
    pub gallery: [&'static str; 4],
}

const DEFAULT_SET: FallbackSet = FallbackSet {
    name: "default",
    keywords: &[],
    hero: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=1600&q=80",
    gallery: [
        "https://images.unsplash.com/photo-1556740738-b6a63e27c4df?w=800&q=80",
        "https://images.unsplash.com/photo-1521791136064-7986c2920216?w=800&q=80",
        "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80",
        "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?w=800&q=80",
    ],
};

const OVERRIDES: &[FallbackSet] = &[
    FallbackSet {
        name: "pets",
        keywords: &["kucing", "cat", "pet"],
        hero: "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=1600&q=80",
        gallery: [
            "https://images.unsplash.com/photo-1573865526739-10659fec78a5?w=800&q=80",
            "https://images.unsplash.com/photo-1495360010541-f48722b34f7d?w=800&q=80",
            "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?w=800&q=80",
            "https://images.unsplash.com/photo-1548247416-ec66f4900b2e?w=800&q=80",
        ],
    },
    FallbackSet {
        name: "food",
        keywords: &["makan", "food", "restaurant", "restoran", "nasi", "cafe"],
        hero: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=1600&q=80",
        gallery: [
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=800&q=80",
            "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=800&q=80",
            "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=800&q=80",
            "https://images.unsplash.com/photo-1540189549336-e6e99c3679fe?w=800&q=80",
        ],
    },
    FallbackSet {
        name: "bakery",
        keywords: &["kek", "cake", "bakery", "roti", "bread"],
        hero: "https://images.unsplash.com/photo-1509440159596-0249088772ff?w=1600&q=80",
        gallery: [
            "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=800&q=80",
            "https://images.unsplash.com/photo-1486427944299-d1955d23e34d?w=800&q=80",
            "https://images.unsplash.com/photo-1517433670267-08bbd4be890f?w=800&q=80",
            "https://images.unsplash.com/photo-1558961363-fa8fdf82db35?w=800&q=80",
        ],
    },
];

/// Static library of complete fallback image sets
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackImageLibrary;

impl FallbackImageLibrary {
    pub fn new() -> Self {
        Self
    }

    /// Pick a set with a lightweight keyword check; the first override whose
    /// keyword appears in the description wins, otherwise "default".
    pub fn select(&self, description: &str) -> (&'static str, ImageSet) {
        let lower = description.to_lowercase();
        let set = OVERRIDES
            .iter()
            .find(|set| set.keywords.iter().any(|k| lower.contains(k)))
            .unwrap_or(&DEFAULT_SET);
        (set.name, Self::to_image_set(set))
    }

    /// Names of all sets, default first
    pub fn set_names(&self) -> Vec<&'static str> {
        std::iter::once(DEFAULT_SET.name)
            .chain(OVERRIDES.iter().map(|s| s.name))
            .collect()
    }

    fn to_image_set(set: &FallbackSet) -> ImageSet {
        ImageSet {
            hero: set.hero.to_string(),
            gallery: set.gallery.iter().map(|u| u.to_string()).collect(),
        }
    }
}
