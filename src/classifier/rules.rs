// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ordered category rule table for business classification
//!
//! Rules are evaluated top to bottom and the first rule with a matching trigger
//! wins. Order is the tie-break policy: pets sit first so any description that
//! mentions kucing, cat or pet gets the pet-shop bundle ("pet food", "cat cafe",
//! "teddy bear pet toys"), and seafood sits above food so "seafood restaurant"
//! lands on the seafood bundle.

use super::BusinessCategory;

/// A tagged rule: any trigger substring selects the bundle
pub struct CategoryRule {
    pub category: BusinessCategory,
    pub triggers: &'static [&'static str],
    pub hero: &'static str,
    pub gallery: [&'static str; 4],
}

pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: BusinessCategory::Pets,
        triggers: &["kucing", "cat", "pet", "anjing", "dog", "haiwan"],
        hero: "bright modern pet shop interior with cats and pet supplies on display, professional photography",
        gallery: [
            "fluffy cat resting on a cat tree in a pet store, soft natural light",
            "shelves of premium pet food and accessories, clean retail display",
            "pet groomer gently brushing a cat, close-up",
            "happy owner holding a kitten at the shop counter, candid",
        ],
    },
    CategoryRule {
        category: BusinessCategory::SoftToys,
        triggers: &["teddy", "bear", "plush", "patung", "soft toy"],
        hero: "cozy soft toy shop interior with shelves of teddy bears and plush animals, warm lighting, professional photography",
        gallery: [
            "close-up of a handmade brown teddy bear sitting on a wooden shelf, soft focus background",
            "colorful plush animal collection arranged on display, bright studio lighting",
            "gift-wrapped teddy bear with ribbon on a pastel table, lifestyle product photo",
            "child hugging a large plush bear in a toy store, natural light",
        ],
    },
    CategoryRule {
        category: BusinessCategory::Seafood,
        triggers: &["ikan", "fish", "seafood", "udang", "prawn", "ketam", "crab", "sotong"],
        hero: "fresh seafood market stall with fish and prawns on crushed ice, vibrant morning light, professional photography",
        gallery: [
            "whole fresh fish arranged on ice at a seafood counter, close-up",
            "grilled prawns and crab served on a platter, food photography",
            "fisherman unloading the daily catch at a harbour, golden hour",
            "clean modern seafood shop interior with display freezers",
        ],
    },
    CategoryRule {
        category: BusinessCategory::Food,
        triggers: &[
            "makan", "food", "restaurant", "restoran", "cafe", "kafe", "nasi", "warung", "catering",
        ],
        hero: "inviting restaurant interior with set tables and warm ambient lighting, professional photography",
        gallery: [
            "signature dish plated beautifully on a ceramic plate, overhead food photography",
            "chef preparing food in a clean open kitchen, action shot",
            "friends enjoying a meal together at a restaurant table, candid",
            "fresh ingredients laid out on a wooden counter, natural light",
        ],
    },
    CategoryRule {
        category: BusinessCategory::Salon,
        triggers: &["salon", "rambut", "hair", "beauty", "kecantikan", "spa", "barber", "gunting"],
        hero: "elegant beauty salon interior with styling chairs and mirrors, soft lighting, professional photography",
        gallery: [
            "hairstylist cutting a client's hair, salon action shot",
            "spa treatment room with towels and candles, calm atmosphere",
            "row of professional hair care products on a shelf, product photography",
            "client smiling after a fresh hairstyle, portrait",
        ],
    },
    CategoryRule {
        category: BusinessCategory::Bakery,
        triggers: &["kek", "cake", "bakery", "roti", "bread", "pastry", "biskut", "cookie"],
        hero: "artisan bakery storefront with fresh bread and cakes in the window, morning light, professional photography",
        gallery: [
            "freshly baked loaves of bread on a rustic wooden board",
            "decorated layer cake on a cake stand, bakery product photo",
            "baker kneading dough on a floured counter, close-up",
            "display case filled with pastries and cookies, warm lighting",
        ],
    },
    CategoryRule {
        category: BusinessCategory::Automotive,
        triggers: &["kereta", "car", "bengkel", "workshop", "auto", "motor", "tayar", "tyre"],
        hero: "clean professional auto repair workshop with a car on a lift, bright lighting, professional photography",
        gallery: [
            "mechanic inspecting a car engine, close-up action shot",
            "row of new tyres stacked in a workshop, product photography",
            "polished car being detailed in a service bay",
            "friendly service advisor handing keys to a customer",
        ],
    },
    CategoryRule {
        category: BusinessCategory::Florist,
        triggers: &["bunga", "flower", "florist", "bouquet", "jambangan"],
        hero: "charming florist shop filled with colorful fresh flowers, natural light, professional photography",
        gallery: [
            "hand-tied bouquet of roses wrapped in kraft paper",
            "florist arranging flowers at a workbench, close-up",
            "buckets of fresh tulips and lilies at a flower stall",
            "wedding flower arrangement on a table, elegant styling",
        ],
    },
];

/// Generic hero template, `{description}` is replaced verbatim
pub const GENERIC_HERO: &str =
    "{description} business storefront, modern and welcoming, professional photography, bright natural lighting";

/// Generic gallery templates, `{description}` is replaced verbatim
pub const GENERIC_GALLERY: [&str; 4] = [
    "{description} products on display, clean commercial photography",
    "{description} interior, welcoming atmosphere, wide angle photo",
    "{description} team at work, candid professional photo",
    "{description} happy customers, lifestyle photography",
];
