//! # REST Routes
//!
//! Route definitions for the REST API.
//!
//! # Route Structure
//!
//! ```text
//! /
//! ├── /health              GET  - Health check
//! └── /trades              GET  - Query trades
//!     └── /{id}            GET  - Get trade by ID
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use trade_query::api::rest::{handlers::AppState, routes::create_router};
//! use trade_query::config::RestConfig;
//! use trade_query::infrastructure::persistence::InMemoryTradeRepository;
//!
//! let state = Arc::new(AppState::new(Arc::new(InMemoryTradeRepository::new())));
//! let router = create_router(state, &RestConfig::default());
//! ```

use crate::api::middleware::logging::{LoggingState, logging_middleware};
use crate::api::rest::handlers::{AppState, get_trade, health_check, list_trades};
use crate::config::RestConfig;
use axum::{
    Router,
    http::{HeaderValue, StatusCode},
    middleware,
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/trades", get(list_trades))
        .route("/trades/{id}", get(get_trade))
}

/// Creates the REST API router with all endpoints and middleware.
///
/// Layers, outermost first: CORS (when enabled), HTTP tracing, request
/// logging, request timeout.
pub fn create_router(state: Arc<AppState>, config: &RestConfig) -> Router {
    let logging_state = Arc::new(LoggingState::default());

    let router = routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn_with_state(
                logging_state,
                logging_middleware,
            ))
            .layer(create_timeout_layer(config)),
    );

    if config.enable_cors {
        router.layer(create_cors_layer(config))
    } else {
        router
    }
}

/// Builds the request timeout layer. Expired requests answer `408`.
#[must_use]
pub fn create_timeout_layer(config: &RestConfig) -> TimeoutLayer {
    TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(config.request_timeout_secs),
    )
}

/// Builds the CORS layer. An empty origin list allows any origin.
#[must_use]
pub fn create_cors_layer(config: &RestConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    cors.allow_origin(origins)
}

/// Creates a minimal router for testing without middleware.
#[cfg(test)]
pub fn create_test_router(state: Arc<AppState>) -> Router {
    routes().with_state(state)
}
