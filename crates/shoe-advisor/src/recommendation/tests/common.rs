use std::collections::BTreeSet;

use crate::recommendation::{
    CriteriaWeights, RecommendationEngine, Shoe, ShoeId, UserPreferences,
};

pub(super) fn shoe(
    id: u32,
    brand: &str,
    color: &str,
    material: &str,
    price: i64,
    occasion: &str,
) -> Shoe {
    Shoe {
        id: ShoeId(id),
        name: format!("{brand} {color} {id}"),
        brand: brand.to_string(),
        color: color.to_string(),
        material: material.to_string(),
        price,
        occasion: occasion.to_string(),
        image_url: None,
        description: None,
    }
}

pub(super) fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Budget of 500k-2M with a Black/Nike preference and no other opinions.
pub(super) fn black_nike_preferences() -> UserPreferences {
    UserPreferences {
        preferred_colors: set(&["Black"]),
        preferred_brands: set(&["Nike"]),
        ..UserPreferences::with_budget(500_000, 2_000_000)
    }
}

pub(super) fn engine_with(preferences: UserPreferences) -> RecommendationEngine {
    RecommendationEngine::new(CriteriaWeights::default(), preferences).expect("default weights")
}

pub(super) fn default_engine() -> RecommendationEngine {
    engine_with(UserPreferences::default())
}

pub(super) fn ids(shoes: impl IntoIterator<Item = ShoeId>) -> Vec<u32> {
    shoes.into_iter().map(|id| id.0).collect()
}
