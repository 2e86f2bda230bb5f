use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use valuation_core::valuation::ValuationInput;

use crate::{
    api::AppJson,
    error::ApiResult,
    main_lib::AppState,
    models::{ErrorResponse, ValuationRequest, ValuationResponse},
};

/// Calculate the estimated value of a commercial property from its type,
/// size, and age.
#[utoipa::path(
    post,
    path = "/api/v1/valuate",
    tag = "valuation",
    request_body = ValuationRequest,
    responses(
        (status = 200, body = ValuationResponse),
        (status = 422, description = "Validation Error", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn valuate_property(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<ValuationRequest>,
) -> ApiResult<Json<ValuationResponse>> {
    tracing::info!(
        property_type = %request.property_type,
        size_sqft = request.size_sqft,
        age_years = request.age_years,
        "Valuation request received"
    );
    let input = ValuationInput::try_from(request)?;
    let result = state.valuation_service.valuate(&input)?;
    Ok(Json(result.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/valuate", post(valuate_property))
}
