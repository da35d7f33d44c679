//! Batch appraisal.
//!
//! Every submitted item is appraised independently and reported in input
//! order; one bad item never short-circuits the rest. The overall HTTP
//! status is reduced from the outcomes afterwards: 200 only when every
//! item valued cleanly, 400 otherwise. An empty batch is trivially clean.

use axum::http::StatusCode;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::error;

use super::validate::{validate_request, ValidationError};

/// One batch item's fate, alongside the fields it was submitted with.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOutcome {
    /// The item's own fields, echoed back so callers can correlate results
    /// without tracking indexes themselves. Empty for non-object items.
    pub fields: Map<String, Value>,
    pub result: ItemResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemResult {
    Valued(i64),
    Failed(ValidationError),
}

impl ItemResult {
    pub fn is_valued(&self) -> bool {
        matches!(self, Self::Valued(_))
    }
}

impl Serialize for ItemOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Echoed fields first, result fields last. If an item happened to
        // submit a key the result also writes, the result's value wins, so
        // the echo pass skips those keys to keep the output a valid map.
        let added: &[&str] = match &self.result {
            ItemResult::Valued(_) => &["carValue"],
            ItemResult::Failed(_) => &["error", "errorCode"],
        };
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.fields {
            if added.contains(&key.as_str()) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        match &self.result {
            ItemResult::Valued(value) => map.serialize_entry("carValue", value)?,
            ItemResult::Failed(failure) => {
                map.serialize_entry("error", &failure.message)?;
                map.serialize_entry("errorCode", &failure.code)?;
            }
        }
        map.end()
    }
}

/// All outcomes for one batch request, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn fully_valued(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| outcome.result.is_valued())
    }

    pub fn status(&self) -> StatusCode {
        if self.fully_valued() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

pub fn appraise_batch(items: &[Value]) -> BatchReport {
    let outcomes = items.iter().map(appraise_item).collect();
    BatchReport { outcomes }
}

fn appraise_item(item: &Value) -> ItemOutcome {
    let Some(fields) = item.as_object() else {
        return ItemOutcome {
            fields: Map::new(),
            result: ItemResult::Failed(ValidationError::invalid_batch_item_type()),
        };
    };

    let result = match validate_request(item) {
        Ok(request) => match request.appraised_value() {
            Ok(value) => ItemResult::Valued(value),
            Err(fault) => {
                error!(model = %fault.model, year = fault.year, "batch item appraisal overflowed");
                ItemResult::Failed(ValidationError::internal_item())
            }
        },
        Err(failure) => ItemResult::Failed(failure),
    };

    ItemOutcome {
        fields: fields.clone(),
        result,
    }
}
