use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::{
    config::{APP_VERSION, SERVICE_NAME},
    main_lib::AppState,
    models::HealthResponse,
};

/// Liveness probe. Always healthy while the process is serving requests.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "valuation",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: APP_VERSION.to_string(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}
