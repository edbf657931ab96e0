use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::catalog::{Catalog, CatalogError};
use super::domain::{CriteriaWeights, Shoe, ShoeEvaluation, UserPreferences};
use super::{filter_by_preferences, RecommendationEngine};
use crate::error::AppError;

/// Shared state for the recommendation endpoints.
#[derive(Debug, Clone)]
pub struct RecommendationState {
    catalog: Arc<Catalog>,
    default_limit: usize,
}

impl RecommendationState {
    pub fn new(catalog: Catalog, default_limit: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            default_limit,
        }
    }

    /// Shoes supplied with a request, checked for unique ids, or the served catalog.
    fn candidates(&self, shoes: Option<Vec<Shoe>>) -> Result<Vec<Shoe>, CatalogError> {
        match shoes {
            Some(shoes) => Ok(Catalog::new(shoes)?.into_shoes()),
            None => Ok(self.catalog.shoes().to_vec()),
        }
    }
}

/// Ranking request. Omitted fields fall back to the default weights, the default preferences,
/// the configured limit, and the served catalog.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub weights: Option<CriteriaWeights>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub prefilter: bool,
    #[serde(default)]
    pub shoes: Option<Vec<Shoe>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub total_candidates: usize,
    pub evaluations: Vec<ExplainedEvaluation>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainedEvaluation {
    #[serde(flatten)]
    pub evaluation: ShoeEvaluation,
    pub explanations: Vec<String>,
}

impl ExplainedEvaluation {
    pub fn new(engine: &RecommendationEngine, evaluation: ShoeEvaluation) -> Self {
        Self {
            explanations: engine.explain(&evaluation),
            evaluation,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    #[serde(default)]
    pub shoes: Option<Vec<Shoe>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterResponse {
    pub shoes: Vec<Shoe>,
}

/// Router builder exposing ranking, filtering, and catalog endpoints.
pub fn recommendation_router(state: RecommendationState) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/recommendations/filter", post(filter_handler))
        .route("/api/v1/catalog", get(catalog_handler))
        .with_state(state)
}

pub(crate) async fn recommend_handler(
    State(state): State<RecommendationState>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let RecommendationRequest {
        weights,
        preferences,
        limit,
        prefilter,
        shoes,
    } = request;

    let engine = match RecommendationEngine::new(
        weights.unwrap_or_default(),
        preferences.unwrap_or_default(),
    ) {
        Ok(engine) => engine,
        Err(error) => {
            warn!(%error, "rejected recommendation request");
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let candidates = match state.candidates(shoes) {
        Ok(candidates) => candidates,
        Err(error) => return rejected_shoes(error),
    };
    let candidates = if prefilter {
        engine.filter_by_criteria(&candidates)
    } else {
        candidates
    };

    let limit = limit.unwrap_or(state.default_limit);
    let evaluations = engine
        .top_recommendations(&candidates, limit)
        .into_iter()
        .map(|evaluation| ExplainedEvaluation::new(&engine, evaluation))
        .collect::<Vec<_>>();

    info!(
        candidates = candidates.len(),
        returned = evaluations.len(),
        prefilter,
        "served recommendations"
    );

    let body = RecommendationResponse {
        total_candidates: candidates.len(),
        evaluations,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn filter_handler(
    State(state): State<RecommendationState>,
    Json(request): Json<FilterRequest>,
) -> Response {
    let candidates = match state.candidates(request.shoes) {
        Ok(candidates) => candidates,
        Err(error) => return rejected_shoes(error),
    };
    let preferences = request.preferences.unwrap_or_default();
    let shoes = filter_by_preferences(&candidates, &preferences);

    (StatusCode::OK, Json(FilterResponse { shoes })).into_response()
}

fn rejected_shoes(error: CatalogError) -> Response {
    warn!(%error, "rejected supplied shoes");
    AppError::from(error).into_response()
}

pub(crate) async fn catalog_handler(State(state): State<RecommendationState>) -> Json<Vec<Shoe>> {
    Json(state.catalog.shoes().to_vec())
}
