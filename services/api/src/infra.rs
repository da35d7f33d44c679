use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;

use coverquote::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Canned request bodies served by the `/api/test-car-*` endpoints so the
/// frontend and manual testers have known-good payloads to replay.
pub(crate) const CAR_SINGLE_FIXTURE: &str = include_str!("../fixtures/car_single.json");
pub(crate) const CAR_BATCH_VALID_FIXTURE: &str = include_str!("../fixtures/car_batch_valid.json");
pub(crate) const CAR_BATCH_MIXED_FIXTURE: &str = include_str!("../fixtures/car_batch_mixed.json");

pub(crate) fn parse_fixture(raw: &str) -> Result<Value, AppError> {
    let fixture = serde_json::from_str(raw)?;
    Ok(fixture)
}
