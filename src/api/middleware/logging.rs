//! # Logging Middleware
//!
//! Request/response logging with structured fields.
//!
//! Every request gets a request ID, taken from the incoming request-ID header
//! when present and generated otherwise. The ID is stored in the request
//! extensions, echoed on the response, and attached to the completion log
//! line along with method, path, query, status and latency.
//!
//! # Usage
//!
//! ```ignore
//! use trade_query::api::middleware::logging::{LoggingState, logging_middleware};
//!
//! let state = Arc::new(LoggingState::default());
//! let app = Router::new()
//!     .route("/trades", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(state, logging_middleware));
//! ```

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Span, debug, error, info, instrument, warn};
use uuid::Uuid;

// ============================================================================
// Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Whether to log request headers at debug level.
    pub log_headers: bool,
    /// Headers to redact from logs.
    pub redacted_headers: Vec<String>,
    /// Header carrying the request ID.
    pub request_id_header: HeaderName,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_headers: false,
            redacted_headers: vec![
                "authorization".to_string(),
                "cookie".to_string(),
                "x-api-key".to_string(),
            ],
            request_id_header: HeaderName::from_static("x-request-id"),
        }
    }
}

impl LoggingConfig {
    /// Creates a new logging config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables header logging.
    #[must_use]
    pub fn with_headers(mut self) -> Self {
        self.log_headers = true;
        self
    }

    /// Sets a custom request ID header name.
    #[must_use]
    pub fn with_request_id_header(mut self, header: HeaderName) -> Self {
        self.request_id_header = header;
        self
    }
}

// ============================================================================
// Request ID
// ============================================================================

/// A unique request identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generates a new random request ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a request ID from an existing string.
    #[must_use]
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the request ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Header Redaction
// ============================================================================

/// Redacts sensitive values from headers.
#[must_use]
pub fn redact_headers(headers: &HeaderMap, redacted_names: &[String]) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value_str = if redacted_names
                .iter()
                .any(|r| r.eq_ignore_ascii_case(name.as_str()))
            {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.as_str().to_string(), value_str)
        })
        .collect()
}

// ============================================================================
// Logging State
// ============================================================================

/// Shared state for logging middleware.
#[derive(Debug, Clone, Default)]
pub struct LoggingState {
    /// Configuration.
    pub config: LoggingConfig,
}

impl LoggingState {
    /// Creates a new logging state.
    #[must_use]
    pub fn new(config: LoggingConfig) -> Self {
        Self { config }
    }
}

// ============================================================================
// Middleware
// ============================================================================

/// Logging middleware function.
///
/// Logs 2xx/3xx completions at info, 4xx at warn and 5xx at error.
#[instrument(skip_all, fields(request_id))]
pub async fn logging_middleware(
    State(state): State<Arc<LoggingState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let config = &state.config;

    let request_id = request
        .headers()
        .get(&config.request_id_header)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(RequestId::from_string)
        .unwrap_or_default();

    Span::current().record("request_id", request_id.as_str());
    request.extensions_mut().insert(request_id.clone());

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);

    if config.log_headers {
        let headers = redact_headers(request.headers(), &config.redacted_headers);
        debug!(%method, %path, headers = ?headers, "Request headers");
    }

    let mut response = next.run(request).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(config.request_id_header.clone(), value);
    }

    let status = response.status();
    let status_code = status.as_u16();

    if status.is_success() || status.is_redirection() {
        info!(%method, %path, query = ?query, status = status_code, duration_ms, "Request completed");
    } else if status.is_client_error() {
        warn!(%method, %path, query = ?query, status = status_code, duration_ms, "Client error");
    } else {
        error!(%method, %path, query = ?query, status = status_code, duration_ms, "Server error");
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{Extension, Router, body::Body, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn router() -> Router {
        let state = Arc::new(LoggingState::default());
        Router::new()
            .route(
                "/echo",
                get(|Extension(id): Extension<RequestId>| async move { id.to_string() }),
            )
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .layer(axum::middleware::from_fn_with_state(state, logging_middleware))
    }

    #[test]
    fn logging_config_default() {
        let config = LoggingConfig::default();
        assert!(!config.log_headers);
        assert_eq!(config.request_id_header.as_str(), "x-request-id");
    }

    #[test]
    fn logging_config_builders() {
        let config = LoggingConfig::new()
            .with_headers()
            .with_request_id_header(HeaderName::from_static("x-correlation-id"));
        assert!(config.log_headers);
        assert_eq!(config.request_id_header.as_str(), "x-correlation-id");
    }

    #[test]
    fn request_id_new_is_unique() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();
        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn request_id_display() {
        let id = RequestId::from_string("display-test");
        assert_eq!(format!("{id}"), "display-test");
    }

    #[test]
    fn redact_headers_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer token"));
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let result = redact_headers(&headers, &["AUTHORIZATION".to_string()]);

        let auth = result.iter().find(|(k, _)| k == "authorization").unwrap();
        let accept = result.iter().find(|(k, _)| k == "accept").unwrap();
        assert_eq!(auth.1, "[REDACTED]");
        assert_eq!(accept.1, "application/json");
    }

    #[tokio::test]
    async fn propagates_incoming_request_id() {
        let response = router()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/echo")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "abc-123");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"abc-123");
    }

    #[tokio::test]
    async fn generates_request_id_when_absent() {
        let response = router()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let id = response.headers()["x-request-id"].to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }
}
