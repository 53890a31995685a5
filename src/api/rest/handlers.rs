//! # REST Handlers
//!
//! Request handlers for the trade query endpoints.
//!
//! # Endpoints
//!
//! - `GET /trades` - Filter, sort and paginate trades
//! - `GET /trades/{id}` - Get trade by ID
//! - `GET /health` - Liveness check
//!
//! `GET /trades` returns a JSON array. Pagination metadata travels in the
//! `X-Total-Count`, `X-Total-Pages`, `X-Page` and `X-Per-Page` response
//! headers so the body stays a plain list of trades.

use crate::application::dto::TradeQueryParams;
use crate::application::error::ApplicationError;
use crate::application::services::trade_query::Page;
use crate::application::use_cases::{GetTradeUseCase, ListTradesUseCase};
use crate::domain::entities::Trade;
use crate::infrastructure::persistence::traits::TradeRepository;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Header carrying the number of trades that matched the filters.
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");
/// Header carrying the number of pages at the requested page size.
pub const TOTAL_PAGES_HEADER: HeaderName = HeaderName::from_static("x-total-pages");
/// Header echoing the returned page number.
pub const PAGE_HEADER: HeaderName = HeaderName::from_static("x-page");
/// Header echoing the page size.
pub const PER_PAGE_HEADER: HeaderName = HeaderName::from_static("x-per-page");

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for REST handlers.
#[derive(Debug)]
pub struct AppState {
    /// Trade repository.
    pub trade_repository: Arc<dyn TradeRepository>,
    /// Query use case.
    pub list_trades: ListTradesUseCase,
    /// Lookup use case.
    pub get_trade: GetTradeUseCase,
}

impl AppState {
    /// Creates the state, wiring both use cases to `trade_repository`.
    #[must_use]
    pub fn new(trade_repository: Arc<dyn TradeRepository>) -> Self {
        Self {
            list_trades: ListTradesUseCase::new(Arc::clone(&trade_repository)),
            get_trade: GetTradeUseCase::new(Arc::clone(&trade_repository)),
            trade_repository,
        }
    }
}

// ============================================================================
// Error Response
// ============================================================================

/// Standard error response format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error response with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl From<ApplicationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ApplicationError) -> Self {
        match &err {
            ApplicationError::Validation { parameter, .. } => validation_error(parameter, &err),
            ApplicationError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NOT_FOUND", err.to_string())),
            ),
            ApplicationError::Domain(domain) if domain.is_validation_error() => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("VALIDATION_ERROR", err.to_string())),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("INTERNAL_ERROR", err.to_string())),
            ),
        }
    }
}

// ============================================================================
// Trade Handlers
// ============================================================================

/// List trades with filtering, sorting and pagination.
///
/// # Errors
///
/// Returns `VALIDATION_ERROR` if a query parameter is malformed or out of range.
/// Returns `INTERNAL_ERROR` if the store cannot be read.
#[instrument(skip(state, params))]
pub async fn list_trades(
    State(state): State<Arc<AppState>>,
    params: Result<Query<TradeQueryParams>, QueryRejection>,
) -> Result<(HeaderMap, Json<Vec<Trade>>), ApiError> {
    let Query(params) = params.map_err(|rejection| {
        warn!("Rejected query string: {}", rejection.body_text());
        validation_error("query", &rejection.body_text())
    })?;

    let query = params.validate().map_err(|e| {
        warn!("Invalid trade query: {}", e);
        ApiError::from(e)
    })?;
    info!("Listing trades with query: {:?}", query);

    let page = state.list_trades.execute(&query).await.map_err(|e| {
        error!("Failed to list trades: {}", e);
        ApiError::from(e)
    })?;

    let headers = pagination_headers(&page);
    Ok((headers, Json(page.items)))
}

/// Get trade by ID.
///
/// # Errors
///
/// Returns `NOT_FOUND` if no trade has the given ID.
/// Returns `INTERNAL_ERROR` if the store cannot be read.
#[instrument(skip(state))]
pub async fn get_trade(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Trade>, ApiError> {
    info!("Getting trade: {}", id);

    let trade = state.get_trade.execute(&id).await.map_err(|e| {
        match &e {
            ApplicationError::NotFound { .. } => warn!("{}", e),
            _ => error!("Failed to find trade: {}", e),
        }
        ApiError::from(e)
    })?;

    Ok(Json(trade))
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Number of trades in the store.
    pub records: u64,
}

/// Health check endpoint.
///
/// # Errors
///
/// Returns `INTERNAL_ERROR` if the store cannot be read.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let records = state.trade_repository.count().await.map_err(|e| {
        error!("Health check failed: {}", e);
        ApiError::from(ApplicationError::from(e))
    })?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records,
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn pagination_headers<T>(page: &Page<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(page.total_count));
    headers.insert(TOTAL_PAGES_HEADER, HeaderValue::from(page.total_pages()));
    headers.insert(PAGE_HEADER, HeaderValue::from(page.page));
    headers.insert(PER_PAGE_HEADER, HeaderValue::from(page.per_page));
    headers
}

fn validation_error(parameter: &str, message: &dyn std::fmt::Display) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::with_details(
            "VALIDATION_ERROR",
            message.to_string(),
            serde_json::json!({ "parameter": parameter }),
        )),
    )
}
