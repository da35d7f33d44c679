use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::quoting::valuation::valuation_router;

pub(super) fn car(model: &str, year: i64) -> Value {
    json!({ "model": model, "year": year })
}

pub(super) async fn post_car_value(payload: &Value) -> Response {
    valuation_router()
        .oneshot(
            Request::post("/api/car-value")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(payload).expect("serializable payload"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_failure_body(payload: &Value, code: &str, message: &str) {
    assert_eq!(payload.get("error"), Some(&json!(message)));
    assert_eq!(payload.get("errorCode"), Some(&json!(code)));
}
