//! HTTP API module for the Happy Day AI service
//!
//! # Endpoints
//! - `GET /`: service banner
//! - `GET /api/v1/health`: health check
//! - `GET /api/v1/models`: advertised model catalog
//! - `GET /openapi.json`: OpenAPI document

pub mod handlers;
pub mod openapi;

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
    routing::get,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Route table, logged at startup
pub const ENDPOINTS: [(&str, &str); 4] = [
    ("/", "Service banner"),
    ("/api/v1/health", "Health check"),
    ("/api/v1/models", "Model catalog"),
    ("/openapi.json", "OpenAPI document"),
];

/// How long browsers may cache a preflight answer
pub const CORS_MAX_AGE: Duration = Duration::from_secs(600);

/// Permissive CORS policy for development.
///
/// Credentials cannot be combined with a wildcard origin, so the request's
/// origin, method and headers are echoed back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

/// Creates the main Axum router with all endpoints
pub fn create_router() -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(
            |res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
                tracing::info!(
                    latency = %format!("{} ms", latency.as_millis()),
                    status = %res.status().as_u16(),
                    "finished processing request"
                );
            },
        );

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/v1/health", get(handlers::health_check))
        .route("/api/v1/models", get(handlers::list_models))
        .route("/openapi.json", get(openapi::openapi_json))
        .layer(trace_layer)
        .layer(cors_layer())
}
