use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json};
use serde_json::{json, Value};

use coverquote::error::AppError;
use coverquote::quoting::{discount_rate, quote_premium, rate_claim_history, valuation_router};

use crate::infra::{
    parse_fixture, AppState, CAR_BATCH_MIXED_FIXTURE, CAR_BATCH_VALID_FIXTURE, CAR_SINGLE_FIXTURE,
};

/// All public routes: the four quoting endpoints, the canned test payloads
/// the frontend replays against them, and the operational endpoints.
pub(crate) fn quoting_routes() -> axum::Router {
    valuation_router()
        .route("/api/risk-rating", post(risk_rating_endpoint))
        .route("/api/quote", post(quote_endpoint))
        .route("/api/calculateDiscount", post(discount_endpoint))
        .route("/api/test-car-single", get(test_car_single_endpoint))
        .route(
            "/api/test-car-batch-valid",
            get(test_car_batch_valid_endpoint),
        )
        .route(
            "/api/test-car-batch-mixed",
            get(test_car_batch_mixed_endpoint),
        )
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn risk_rating_endpoint(Json(payload): Json<Value>) -> Response {
    match rate_claim_history(&payload) {
        Ok(rating) => (StatusCode::OK, Json(rating)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn quote_endpoint(Json(payload): Json<Value>) -> Response {
    match quote_premium(&payload) {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn discount_endpoint(Json(payload): Json<Value>) -> Response {
    match discount_rate(&payload) {
        Ok(rate) => (StatusCode::OK, Json(rate)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn test_car_single_endpoint() -> Result<Json<Value>, AppError> {
    parse_fixture(CAR_SINGLE_FIXTURE).map(Json)
}

pub(crate) async fn test_car_batch_valid_endpoint() -> Result<Json<Value>, AppError> {
    parse_fixture(CAR_BATCH_VALID_FIXTURE).map(Json)
}

pub(crate) async fn test_car_batch_mixed_endpoint() -> Result<Json<Value>, AppError> {
    parse_fixture(CAR_BATCH_MIXED_FIXTURE).map(Json)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
