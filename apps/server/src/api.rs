mod health;
mod valuation;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::FromRequest,
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::{Config, APP_NAME, APP_VERSION},
    error::ApiError,
    main_lib::AppState,
    models::{
        ErrorResponse, HealthResponse, RootResponse, ValuationBreakdown, ValuationRequest,
        ValuationResponse,
    },
};

pub const API_PREFIX: &str = "/api/v1";
pub const OPENAPI_PATH: &str = "/openapi.json";

/// JSON body extractor whose rejections surface as validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[utoipa::path(get, path = "/", responses((status = 200, body = RootResponse)))]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", APP_NAME),
        version: APP_VERSION.to_string(),
        docs: OPENAPI_PATH.to_string(),
        health: format!("{}/health", API_PREFIX),
    })
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Property Valuation Service",
        description = "A stateless microservice for calculating commercial real estate property valuations based on property type, size, and age."
    ),
    paths(root, health::health_check, valuation::valuate_property),
    components(schemas(
        ValuationRequest,
        ValuationResponse,
        ValuationBreakdown,
        ErrorResponse,
        HealthResponse,
        RootResponse
    )),
    tags((name = "valuation"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    if config.allows_any_origin() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }
    let origins = config
        .cors_allow
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", o))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = cors_layer(config)?;
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(valuation::router());

    Ok(Router::new()
        .route("/", get(root))
        .nest(API_PREFIX, api)
        .route(OPENAPI_PATH, get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        // Set runs first so propagate and trace both see the id.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}
