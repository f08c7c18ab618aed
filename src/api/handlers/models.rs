use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{ModelDescriptor, catalog};

/// Model listing response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ModelsResponse {
    #[schema(value_type = Vec<ModelDescriptor>)]
    pub models: &'static [ModelDescriptor],
}

/// GET /api/v1/models
///
/// Lists the models advertised by the service.
#[utoipa::path(
    get,
    path = "/api/v1/models",
    responses(
        (status = 200, description = "Advertised models", body = ModelsResponse)
    ),
    tag = "Models"
)]
pub async fn list_models() -> impl IntoResponse {
    let response = ModelsResponse { models: catalog() };
    tracing::debug!("/api/v1/models listing {} model(s)", response.models.len());

    (StatusCode::OK, Json(response))
}
