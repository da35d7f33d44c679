use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::error;

use super::batch::appraise_batch;
use super::validate::{validate_request, ValidationError};

/// Router builder exposing the car valuation endpoint.
pub fn valuation_router() -> Router {
    Router::new().route("/api/car-value", post(car_value_handler))
}

/// One endpoint, two shapes: a JSON array is appraised as a batch, a JSON
/// object as a single car. Anything else is rejected before validation.
pub(crate) async fn car_value_handler(Json(payload): Json<Value>) -> Response {
    match &payload {
        Value::Array(items) => {
            let report = appraise_batch(items);
            (report.status(), Json(report)).into_response()
        }
        Value::Object(_) => match validate_request(&payload) {
            Ok(request) => match request.appraised_value() {
                Ok(value) => {
                    (StatusCode::OK, Json(json!({ "carValue": value }))).into_response()
                }
                Err(fault) => {
                    error!(model = %fault.model, year = fault.year, "car appraisal overflowed");
                    ValidationError::internal().into_response()
                }
            },
            Err(failure) => failure.into_response(),
        },
        _ => ValidationError::invalid_single_input_type().into_response(),
    }
}
