use super::domain::{CriteriaScore, Shoe, UserPreferences};
use super::tables;

pub(crate) const NEUTRAL_SCORE: f64 = 5.0;
pub(crate) const EXACT_MATCH_SCORE: f64 = 10.0;
pub(crate) const SIMILAR_COLOR_SCORE: f64 = 7.0;
pub(crate) const MISMATCHED_COLOR_SCORE: f64 = 3.0;
pub(crate) const OUT_OF_BUDGET_SCORE: f64 = 2.0;

/// Floor of the linear price ramp between the budget edge and the ideal band.
const BUDGET_EDGE_SCORE: f64 = 7.0;
const IDEAL_BAND_LOWER: f64 = 0.25;
const IDEAL_BAND_UPPER: f64 = 0.75;

pub(crate) fn score_shoe(shoe: &Shoe, preferences: &UserPreferences) -> CriteriaScore {
    CriteriaScore {
        color: color_score(&shoe.color, preferences),
        material: material_score(&shoe.material, preferences),
        price: price_score(shoe.price, preferences),
        brand: brand_score(&shoe.brand, preferences),
        occasion: occasion_score(&shoe.occasion, preferences),
    }
}

pub(crate) fn color_score(color: &str, preferences: &UserPreferences) -> f64 {
    if preferences.preferred_colors.is_empty() {
        return NEUTRAL_SCORE;
    }
    if preferences.preferred_colors.contains(color) {
        return EXACT_MATCH_SCORE;
    }
    if is_similar_to_preferred(color, preferences) {
        SIMILAR_COLOR_SCORE
    } else {
        MISMATCHED_COLOR_SCORE
    }
}

/// True when the color is preferred, similar to a preferred color, or no colors are preferred.
pub(crate) fn is_color_compatible(color: &str, preferences: &UserPreferences) -> bool {
    preferences.preferred_colors.is_empty()
        || preferences.preferred_colors.contains(color)
        || is_similar_to_preferred(color, preferences)
}

fn is_similar_to_preferred(color: &str, preferences: &UserPreferences) -> bool {
    preferences
        .preferred_colors
        .iter()
        .any(|preferred| tables::similar_colors(preferred).contains(&color))
}

pub(crate) fn material_score(material: &str, preferences: &UserPreferences) -> f64 {
    if preferences.preferred_materials.is_empty() {
        return NEUTRAL_SCORE;
    }
    if preferences.preferred_materials.contains(material) {
        return EXACT_MATCH_SCORE;
    }
    tables::material_quality(material)
}

/// Scores a price against the budget.
///
/// The middle half of the budget is the ideal band and scores 10. Prices between a budget edge
/// and the band ramp linearly from 7 at the edge up to 10 at the band. Anything outside the
/// budget, including every price when `min_price > max_price`, scores 2.
pub(crate) fn price_score(price: i64, preferences: &UserPreferences) -> f64 {
    if !preferences.within_budget(price) {
        return OUT_OF_BUDGET_SCORE;
    }

    // A single-point budget has no band to interpolate across.
    if preferences.min_price == preferences.max_price {
        return EXACT_MATCH_SCORE;
    }

    let min = preferences.min_price as f64;
    let range = preferences.max_price as f64 - min;
    let price = price as f64;
    let ideal_min = min + range * IDEAL_BAND_LOWER;
    let ideal_max = min + range * IDEAL_BAND_UPPER;

    if price >= ideal_min && price <= ideal_max {
        return EXACT_MATCH_SCORE;
    }

    let distance = (price - ideal_min).abs().min((price - ideal_max).abs());
    let max_distance = range * IDEAL_BAND_LOWER;
    let ramp = 1.0 - distance / max_distance;

    (BUDGET_EDGE_SCORE + (EXACT_MATCH_SCORE - BUDGET_EDGE_SCORE) * ramp)
        .clamp(BUDGET_EDGE_SCORE, EXACT_MATCH_SCORE)
}

pub(crate) fn brand_score(brand: &str, preferences: &UserPreferences) -> f64 {
    if preferences.preferred_brands.contains(brand) {
        return EXACT_MATCH_SCORE;
    }
    tables::brand_reputation(brand)
}

pub(crate) fn occasion_score(occasion: &str, preferences: &UserPreferences) -> f64 {
    if preferences.preferred_occasions.contains(occasion) {
        return EXACT_MATCH_SCORE;
    }
    tables::occasion_versatility(occasion)
}
