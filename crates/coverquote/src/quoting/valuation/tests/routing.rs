use axum::http::StatusCode;
use serde_json::json;

use super::common::*;
use crate::quoting::valuation::router::car_value_handler;

#[tokio::test]
async fn single_car_is_valued() {
    let response = post_car_value(&car("Civic", 2014)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "carValue": 6614 }));
}

#[tokio::test]
async fn handler_rejects_scalar_payloads() {
    for payload in [json!("Civic"), json!(42), json!(true), json!(null)] {
        let response = car_value_handler(axum::Json(payload)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert_failure_body(
            &payload,
            "E_INVALID_SINGLE_INPUT_TYPE",
            "Input must be a JSON object for a single car request.",
        );
    }
}

#[tokio::test]
async fn single_validation_failures_surface_their_code() {
    let response = post_car_value(&json!({ "model": "Porsche", "year": "oops" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_failure_body(
        &payload,
        "E_INVALID_YEAR_FORMAT",
        "Year must be a positive integer. Invalid format.",
    );
}

#[tokio::test]
async fn appraisal_overflow_is_an_internal_error() {
    let response = post_car_value(&car("Civic", i64::MAX)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_failure_body(
        &payload,
        "E_INTERNAL_SERVER_ERROR",
        "An unexpected error occurred.",
    );
}

#[tokio::test]
async fn valid_batches_return_ok() {
    let response = post_car_value(&json!([car("Civic", 2014), car("Porsche", 2023)])).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!([
            { "model": "Civic", "year": 2014, "carValue": 6614 },
            { "model": "Porsche", "year": 2023, "carValue": 10423 },
        ])
    );
}

#[tokio::test]
async fn mixed_batches_return_bad_request_with_every_item() {
    let response =
        post_car_value(&json!([car("Civic", 2010), { "model": "Porsche", "year": "oops" }])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0], json!({ "model": "Civic", "year": 2010, "carValue": 6610 }));
    assert_eq!(payload[1]["model"], json!("Porsche"));
    assert_eq!(payload[1]["year"], json!("oops"));
    assert_failure_body(
        &payload[1],
        "E_INVALID_YEAR_FORMAT",
        "Year must be a positive integer. Invalid format.",
    );
}

#[tokio::test]
async fn empty_batches_return_ok() {
    let response = post_car_value(&json!([])).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!([]));
}
