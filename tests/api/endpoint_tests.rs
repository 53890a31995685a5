//! # Endpoint Integration Tests
//!
//! Drives the fully layered router (CORS, tracing, request logging, timeout)
//! over a generated record store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;
use trade_query::api::rest::{AppState, create_router};
use trade_query::config::RestConfig;
use trade_query::domain::entities::Trade;
use trade_query::infrastructure::fixtures::generate_records;
use trade_query::infrastructure::persistence::InMemoryTradeRepository;

const RECORDS: usize = 100;
const SEED: u64 = 20_240_517;

// ============================================================================
// Helpers
// ============================================================================

fn store() -> Vec<Trade> {
    let anchor = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
    generate_records(RECORDS, SEED, anchor).unwrap()
}

fn router(records: Vec<Trade>) -> Router {
    let repo = InMemoryTradeRepository::from_records(records).unwrap();
    create_router(
        Arc::new(AppState::new(Arc::new(repo))),
        &RestConfig::default(),
    )
}

async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn trades(response: Response) -> Vec<Trade> {
    serde_json::from_value(json(response).await).unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn default_page_is_first_ten_in_store_order() {
    let records = store();
    let router = router(records.clone());

    let response = get(&router, "/trades").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "100");
    assert_eq!(response.headers()["x-total-pages"], "10");
    assert!(response.headers().contains_key("x-request-id"));

    assert_eq!(trades(response).await, records[..10]);
}

#[tokio::test]
async fn walking_pages_visits_every_record_once() {
    let records = store();
    let router = router(records.clone());

    let mut seen = Vec::new();
    for page in 1..=4 {
        let response = get(&router, &format!("/trades?perPage=30&page={page}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        seen.extend(trades(response).await);
    }

    assert_eq!(seen, records);
}

#[tokio::test]
async fn filters_combine_with_and() {
    let records = store();
    let router = router(records.clone());

    let response = get(
        &router,
        "/trades?assetClass=bond&tradeType=sell&minPrice=25&maxPrice=75&perPage=100",
    )
    .await;
    let returned = trades(response).await;

    let expected: Vec<Trade> = records
        .into_iter()
        .filter(|t| t.asset_class() == "Bond")
        .filter(|t| !t.is_buy())
        .filter(|t| (25.0..=75.0).contains(&t.price().get()))
        .collect();
    assert_eq!(returned, expected);
}

#[tokio::test]
async fn sorted_by_trade_date_time() {
    let router = router(store());

    let response = get(&router, "/trades?sort=tradeDateTime&perPage=100").await;
    let returned = trades(response).await;

    assert_eq!(returned.len(), RECORDS);
    assert!(
        returned
            .windows(2)
            .all(|w| w[0].trade_date_time() <= w[1].trade_date_time())
    );
}

#[tokio::test]
async fn lookup_round_trips_listed_record() {
    let records = store();
    let router = router(records.clone());
    let target = &records[42];

    let response = get(&router, &format!("/trades/{}", target.trade_id())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let found: Trade = serde_json::from_value(json(response).await).unwrap();
    assert_eq!(&found, target);
}

#[tokio::test]
async fn lookup_of_unknown_id_is_404_with_body() {
    let router = router(store());

    let response = get(&router, "/trades/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Trade not found: does-not-exist");
}

#[tokio::test]
async fn validation_error_before_filtering() {
    let router = router(store());

    let response = get(&router, "/trades?assetClass=FX&perPage=500").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["parameter"], "perPage");
}

#[tokio::test]
async fn percent_encoded_offset_is_accepted() {
    let router = router(store());

    let response = get(
        &router,
        "/trades?start=2024-05-01T00:00:00%2B02:00&end=2024-05-17",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_counts_generated_records() {
    let router = router(store());

    let response = get(&router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"], RECORDS);
}
