//! Weighted Sum Model ranking of catalog shoes against shopper preferences.

pub mod catalog;
pub mod domain;
mod explain;
pub mod router;
mod rules;
pub mod tables;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError};
pub use domain::{
    CriteriaScore, CriteriaWeights, Criterion, EngineError, NormalizedWeights, Shoe, ShoeEvaluation,
    ShoeId, UserPreferences,
};
pub use explain::format_rupiah;
pub use router::{recommendation_router, ExplainedEvaluation, RecommendationState};

use tracing::debug;

/// Scores and ranks shoes for one fixed set of weights and preferences.
///
/// Weights are normalized once at construction. Scoring with different inputs requires a new
/// engine.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    weights: NormalizedWeights,
    preferences: UserPreferences,
}

impl RecommendationEngine {
    pub fn new(weights: CriteriaWeights, preferences: UserPreferences) -> Result<Self, EngineError> {
        let weights = weights.normalize()?;
        Ok(Self {
            weights,
            preferences,
        })
    }

    pub fn weights(&self) -> &NormalizedWeights {
        &self.weights
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn score(&self, shoe: &Shoe) -> CriteriaScore {
        rules::score_shoe(shoe, &self.preferences)
    }

    /// Sum of each criterion score times its normalized weight, in `[0, 10]`.
    pub fn weighted_score(&self, scores: &CriteriaScore) -> f64 {
        Criterion::ALL
            .iter()
            .map(|criterion| scores.get(*criterion) * self.weights.get(*criterion))
            .sum::<f64>()
            .clamp(0.0, 10.0)
    }

    /// Scores every shoe and returns them sorted by weighted score, best first.
    ///
    /// The sort is stable, so shoes with equal weighted scores keep their input order. Ranks are
    /// 1-based positions in the sorted list.
    pub fn evaluate(&self, shoes: &[Shoe]) -> Vec<ShoeEvaluation> {
        let mut evaluations: Vec<ShoeEvaluation> = shoes
            .iter()
            .map(|shoe| {
                let scores = self.score(shoe);
                ShoeEvaluation {
                    shoe: shoe.clone(),
                    weighted_score: self.weighted_score(&scores),
                    match_percentage: match_percentage(&scores),
                    scores,
                    rank: 0,
                }
            })
            .collect();

        evaluations.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
        for (index, evaluation) in evaluations.iter_mut().enumerate() {
            evaluation.rank = index + 1;
        }

        debug!(
            candidates = evaluations.len(),
            top_score = evaluations.first().map(|evaluation| evaluation.weighted_score),
            "evaluated shoe candidates"
        );

        evaluations
    }

    /// The first `limit` entries of [`evaluate`](Self::evaluate).
    pub fn top_recommendations(&self, shoes: &[Shoe], limit: usize) -> Vec<ShoeEvaluation> {
        let mut evaluations = self.evaluate(shoes);
        evaluations.truncate(limit);
        evaluations
    }

    /// See [`filter_by_preferences`].
    pub fn filter_by_criteria(&self, shoes: &[Shoe]) -> Vec<Shoe> {
        filter_by_preferences(shoes, &self.preferences)
    }

    /// Human-readable reasons for a recommendation, in fixed criterion order.
    pub fn explain(&self, evaluation: &ShoeEvaluation) -> Vec<String> {
        explain::explain(evaluation)
    }
}

/// Drops shoes outside the budget and, when colors are preferred, shoes whose color is
/// neither preferred nor similar to a preferred color. Weights play no part.
pub fn filter_by_preferences(shoes: &[Shoe], preferences: &UserPreferences) -> Vec<Shoe> {
    shoes
        .iter()
        .filter(|shoe| preferences.within_budget(shoe.price))
        .filter(|shoe| rules::is_color_compatible(&shoe.color, preferences))
        .cloned()
        .collect()
}

/// Unweighted fit quality in percent. Independent of the engine's weights.
pub fn match_percentage(scores: &CriteriaScore) -> f64 {
    scores.mean() / 10.0 * 100.0
}
