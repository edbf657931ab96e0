//! Fixed reference data used by the scoring rules.
//!
//! Similarity is directed: a shoe's color counts as similar when it appears in the list of a
//! *preferred* color, not the other way round.

use std::collections::HashSet;

use super::domain::EngineError;

/// Score used when a material, brand, or occasion is not listed in its table.
pub const DEFAULT_TABLE_SCORE: f64 = 5.0;

pub const COLOR_SIMILARITY: &[(&str, &[&str])] = &[
    ("Black", &["Gray", "Navy"]),
    ("White", &["Beige", "Tan"]),
    ("Brown", &["Tan", "Beige"]),
    ("Navy", &["Black", "Blue"]),
    ("Blue", &["Navy"]),
    ("Gray", &["Black", "White"]),
    ("Red", &[]),
    ("Green", &[]),
    ("Tan", &["Brown", "Beige"]),
    ("Beige", &["Tan", "White"]),
];

pub const MATERIAL_QUALITY: &[(&str, f64)] = &[
    ("Leather", 9.0),
    ("Suede", 8.0),
    ("Primeknit", 8.0),
    ("Mesh", 7.0),
    ("Canvas", 6.0),
    ("Synthetic", 5.0),
    ("Rubber", 4.0),
];

pub const BRAND_REPUTATION: &[(&str, f64)] = &[
    ("Nike", 9.0),
    ("Adidas", 9.0),
    ("Clarks", 8.0),
    ("New Balance", 8.0),
    ("Converse", 7.0),
    ("Vans", 7.0),
    ("Puma", 7.0),
    ("Reebok", 6.0),
];

pub const OCCASION_VERSATILITY: &[(&str, f64)] = &[
    ("Casual", 8.0),
    ("Travel", 8.0),
    ("Formal", 7.0),
    ("Work", 7.0),
    ("Sport", 6.0),
    ("Hiking", 5.0),
    ("Party", 5.0),
    ("Beach", 4.0),
];

/// Colors considered close to `color`. Unknown colors have no neighbours.
pub fn similar_colors(color: &str) -> &'static [&'static str] {
    COLOR_SIMILARITY
        .iter()
        .find(|(key, _)| *key == color)
        .map(|(_, similar)| *similar)
        .unwrap_or(&[])
}

pub fn material_quality(material: &str) -> f64 {
    lookup(MATERIAL_QUALITY, material)
}

pub fn brand_reputation(brand: &str) -> f64 {
    lookup(BRAND_REPUTATION, brand)
}

pub fn occasion_versatility(occasion: &str) -> f64 {
    lookup(OCCASION_VERSATILITY, occasion)
}

fn lookup(table: &[(&str, f64)], key: &str) -> f64 {
    table
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_TABLE_SCORE)
}

/// Checks that every table score lies in `[0, 10]` and that no key is listed twice.
pub fn validate_tables() -> Result<(), EngineError> {
    let scored = [
        ("material quality", MATERIAL_QUALITY),
        ("brand reputation", BRAND_REPUTATION),
        ("occasion versatility", OCCASION_VERSATILITY),
    ];

    for (table, entries) in scored {
        let mut seen = HashSet::new();
        for (key, value) in entries {
            if !seen.insert(*key) {
                return Err(EngineError::DuplicateTableKey { table, key: *key });
            }
            if !(0.0..=10.0).contains(value) {
                return Err(EngineError::TableScoreOutOfRange {
                    table,
                    key: *key,
                    value: *value,
                });
            }
        }
    }

    let mut seen = HashSet::new();
    for (key, _) in COLOR_SIMILARITY {
        if !seen.insert(*key) {
            return Err(EngineError::DuplicateTableKey {
                table: "color similarity",
                key: *key,
            });
        }
    }

    Ok(())
}
