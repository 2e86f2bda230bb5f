use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use valuation_core::errors::Error as CoreError;

use crate::models::ErrorResponse;

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error during valuation";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    fn is_validation(&self) -> bool {
        match self {
            ApiError::Core(e) => e.is_validation(),
            ApiError::Validation(_) => true,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = if self.is_validation() {
            tracing::warn!("Validation error: {}", self);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(self.to_string(), VALIDATION_ERROR),
            )
        } else {
            // Detail stays in the logs; callers get a fixed message.
            tracing::error!("Unexpected error during valuation: {:?}", self);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(INTERNAL_ERROR_DETAIL, INTERNAL_ERROR),
            )
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
