use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::recommendation::router::{
    recommend_handler, FilterResponse, RecommendationRequest, RecommendationResponse,
};
use crate::recommendation::{
    recommendation_router, Catalog, CriteriaWeights, RecommendationState, Shoe,
};

fn state() -> RecommendationState {
    RecommendationState::new(Catalog::sample(), 5)
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}

#[tokio::test]
async fn recommend_route_uses_defaults_for_empty_body() {
    let response = recommendation_router(state())
        .oneshot(json_request("/api/v1/recommendations", json!({})))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body: RecommendationResponse = read_json(response).await;
    assert_eq!(body.total_candidates, 6);
    assert_eq!(body.evaluations.len(), 5);
    assert_eq!(body.evaluations[0].evaluation.shoe.id.0, 1);
    assert_eq!(body.evaluations[0].evaluation.rank, 1);
    assert_eq!(body.evaluations[0].explanations.len(), 5);
}

#[tokio::test]
async fn recommend_route_honours_prefilter_and_limit() {
    let response = recommendation_router(state())
        .oneshot(json_request(
            "/api/v1/recommendations",
            json!({ "prefilter": true, "limit": 2 }),
        ))
        .await
        .expect("router responds");

    let body: RecommendationResponse = read_json(response).await;
    assert_eq!(body.total_candidates, 3);
    let ids: Vec<u32> = body
        .evaluations
        .iter()
        .map(|entry| entry.evaluation.shoe.id.0)
        .collect();
    assert_eq!(ids, vec![1, 4]);
}

#[tokio::test]
async fn recommend_route_rejects_zero_weights() {
    let response = recommendation_router(state())
        .oneshot(json_request(
            "/api/v1/recommendations",
            json!({
                "weights": { "color": 0, "material": 0, "price": 0, "brand": 0, "occasion": 0 }
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = read_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("positive"));
}

#[tokio::test]
async fn recommend_handler_scores_supplied_shoes() {
    let request = RecommendationRequest {
        weights: Some(CriteriaWeights::from_percentages(10, 10, 60, 10, 10)),
        preferences: Some(black_nike_preferences()),
        limit: Some(10),
        prefilter: false,
        shoes: Some(vec![
            shoe(1, "Nike", "White", "Leather", 1_299_000, "Casual"),
            shoe(2, "Vans", "Black", "Canvas", 5_000_000, "Casual"),
        ]),
    };

    let response = recommend_handler(State(state()), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: RecommendationResponse = read_json(response).await;
    assert_eq!(body.total_candidates, 2);
    let first = &body.evaluations[0].evaluation;
    assert_eq!(first.shoe.id.0, 1);
    assert_eq!(first.scores.color, 3.0);
    assert_eq!(first.scores.brand, 10.0);
    assert_eq!(first.scores.price, 10.0);
}

#[tokio::test]
async fn filter_route_applies_default_preferences() {
    let response = recommendation_router(state())
        .oneshot(json_request("/api/v1/recommendations/filter", json!({})))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body: FilterResponse = read_json(response).await;
    let ids: Vec<u32> = body.shoes.iter().map(|shoe| shoe.id.0).collect();
    assert_eq!(ids, vec![1, 4, 5]);
}

#[tokio::test]
async fn catalog_route_lists_served_shoes() {
    let response = recommendation_router(state())
        .oneshot(
            Request::get("/api/v1/catalog")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let shoes: Vec<Shoe> = read_json(response).await;
    assert_eq!(shoes.len(), 6);
    assert_eq!(shoes[5].name, "Oxford Classic");
}

#[tokio::test]
async fn recommend_route_rejects_duplicate_shoe_ids() {
    let shoes = vec![
        shoe(1, "Nike", "Black", "Leather", 1_000_000, "Casual"),
        shoe(1, "Vans", "White", "Canvas", 800_000, "Casual"),
    ];
    let response = recommendation_router(state())
        .oneshot(json_request(
            "/api/v1/recommendations",
            json!({ "shoes": shoes }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("shoe id 1 appears more than once"));
}

#[tokio::test]
async fn filter_route_rejects_duplicate_shoe_ids() {
    let shoes = vec![
        shoe(7, "Nike", "Black", "Leather", 1_000_000, "Casual"),
        shoe(7, "Nike", "Black", "Leather", 1_000_000, "Casual"),
    ];
    let response = recommendation_router(state())
        .oneshot(json_request(
            "/api/v1/recommendations/filter",
            json!({ "shoes": shoes }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn filter_route_filters_supplied_shoes_with_given_preferences() {
    let shoes = vec![
        shoe(1, "Nike", "Navy", "Mesh", 900_000, "Sport"),
        shoe(2, "Nike", "Red", "Mesh", 900_000, "Sport"),
        shoe(3, "Nike", "Black", "Mesh", 9_000_000, "Sport"),
    ];
    let response = recommendation_router(state())
        .oneshot(json_request(
            "/api/v1/recommendations/filter",
            json!({ "preferences": black_nike_preferences(), "shoes": shoes }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body: FilterResponse = read_json(response).await;
    let ids: Vec<u32> = body.shoes.iter().map(|shoe| shoe.id.0).collect();
    assert_eq!(ids, vec![1]);
}
