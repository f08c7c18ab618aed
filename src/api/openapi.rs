//! OpenAPI document for the HTTP surface
//!
//! Generated at compile time from the `#[utoipa::path]` annotations on the
//! handlers. Title and version are stamped from the service constants.

use axum::{Json, http::StatusCode, response::IntoResponse};
use utoipa::OpenApi;

use crate::{SERVICE_TITLE, SERVICE_VERSION};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::root::root,
        crate::api::handlers::health::health_check,
        crate::api::handlers::models::list_models,
    ),
    components(
        schemas(
            crate::api::handlers::RootResponse,
            crate::api::handlers::HealthResponse,
            crate::api::handlers::ModelsResponse,
            crate::models::ModelDescriptor,
            crate::models::ModelKind,
            crate::models::ModelStatus,
        )
    ),
    tags(
        (name = "Service", description = "Service banner and health monitoring"),
        (name = "Models", description = "Advertised analysis models")
    )
)]
pub struct ApiDoc;

/// Builds the OpenAPI document with the service title and version
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = SERVICE_TITLE.to_string();
    doc.info.version = SERVICE_VERSION.to_string();
    doc
}

/// GET /openapi.json
pub async fn openapi_json() -> impl IntoResponse {
    (StatusCode::OK, Json(api_doc()))
}
