use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ROOT_MESSAGE: &str = "Happy Day AI Service is running!";

/// Root endpoint response structure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// GET /
///
/// Liveness banner.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    ),
    tag = "Service"
)]
pub async fn root() -> impl IntoResponse {
    let response = RootResponse {
        message: ROOT_MESSAGE.to_string(),
    };

    (StatusCode::OK, Json(response))
}
