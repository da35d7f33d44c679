use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use super::appraisal::ValuationRequest;
use crate::quoting::json_integer;

/// Machine-readable codes for every way a valuation request can fail.
/// Serialized as the wire strings (`E_MISSING_MODEL` etc.) clients key off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuationErrorCode {
    InvalidInputType,
    InvalidSingleInputType,
    MissingModel,
    InvalidModelType,
    EmptyModel,
    MissingYear,
    InvalidYearFormat,
    InvalidYearValue,
    InvalidBatchItemType,
    InternalServerError,
    InternalServerErrorItem,
}

impl ValuationErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInputType => "E_INVALID_INPUT_TYPE",
            Self::InvalidSingleInputType => "E_INVALID_SINGLE_INPUT_TYPE",
            Self::MissingModel => "E_MISSING_MODEL",
            Self::InvalidModelType => "E_INVALID_MODEL_TYPE",
            Self::EmptyModel => "E_EMPTY_MODEL",
            Self::MissingYear => "E_MISSING_YEAR",
            Self::InvalidYearFormat => "E_INVALID_YEAR_FORMAT",
            Self::InvalidYearValue => "E_INVALID_YEAR_VALUE",
            Self::InvalidBatchItemType => "E_INVALID_BATCH_ITEM_TYPE",
            Self::InternalServerError => "E_INTERNAL_SERVER_ERROR",
            Self::InternalServerErrorItem => "E_INTERNAL_SERVER_ERROR_ITEM",
        }
    }

    /// Validation codes are caller mistakes (400); the two internal codes
    /// cover faults the caller did not cause (500).
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InternalServerError | Self::InternalServerErrorItem => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ValuationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValuationErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A rejected request: one code, one canonical human-readable message. The
/// HTTP status derives from the code, so the pair can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub code: ValuationErrorCode,
    pub message: String,
}

impl ValidationError {
    fn new(code: ValuationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_input_type() -> Self {
        Self::new(
            ValuationErrorCode::InvalidInputType,
            "Input must be a JSON object.",
        )
    }

    pub(crate) fn invalid_single_input_type() -> Self {
        Self::new(
            ValuationErrorCode::InvalidSingleInputType,
            "Input must be a JSON object for a single car request.",
        )
    }

    pub(crate) fn missing_model() -> Self {
        Self::new(ValuationErrorCode::MissingModel, "Missing 'model' parameter.")
    }

    pub(crate) fn invalid_model_type() -> Self {
        Self::new(
            ValuationErrorCode::InvalidModelType,
            "'model' must be a string.",
        )
    }

    pub(crate) fn empty_model() -> Self {
        Self::new(ValuationErrorCode::EmptyModel, "Model cannot be empty.")
    }

    pub(crate) fn missing_year() -> Self {
        Self::new(ValuationErrorCode::MissingYear, "Missing 'year' parameter.")
    }

    pub(crate) fn invalid_year_format() -> Self {
        Self::new(
            ValuationErrorCode::InvalidYearFormat,
            "Year must be a positive integer. Invalid format.",
        )
    }

    /// The detail names the sub-reason (null, wrong type, decimals, range,
    /// non-positive); the code stays `E_INVALID_YEAR_VALUE` for all of them.
    pub(crate) fn invalid_year_value(detail: &str) -> Self {
        Self::new(
            ValuationErrorCode::InvalidYearValue,
            format!("Invalid 'year' parameter. {detail}"),
        )
    }

    pub(crate) fn invalid_batch_item_type() -> Self {
        Self::new(
            ValuationErrorCode::InvalidBatchItemType,
            "Each item in the batch must be a JSON object.",
        )
    }

    pub(crate) fn internal() -> Self {
        Self::new(
            ValuationErrorCode::InternalServerError,
            "An unexpected error occurred.",
        )
    }

    pub(crate) fn internal_item() -> Self {
        Self::new(
            ValuationErrorCode::InternalServerErrorItem,
            "An unexpected error occurred for this item.",
        )
    }

    pub fn status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// The response body shape shared by single responses and batch items.
    pub fn body(&self) -> Value {
        json!({ "error": self.message, "errorCode": self.code })
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Validate an arbitrary JSON value as a valuation request.
///
/// Checks run in a fixed order (shape, then model presence/type/emptiness,
/// then year presence/format/value) so the same malformed payload always
/// yields the same first failure. `model` is echoed back untrimmed; trimming
/// only feeds the emptiness check. String years must be bare ASCII digits --
/// no sign, no decimal point -- and parse to i64.
pub fn validate_request(payload: &Value) -> Result<ValuationRequest, ValidationError> {
    let Some(fields) = payload.as_object() else {
        return Err(ValidationError::invalid_input_type());
    };

    let model = match fields.get("model") {
        None => return Err(ValidationError::missing_model()),
        Some(value) => value,
    };
    let Some(model) = model.as_str() else {
        return Err(ValidationError::invalid_model_type());
    };
    if model.trim().is_empty() {
        return Err(ValidationError::empty_model());
    }

    let year = match fields.get("year") {
        None => return Err(ValidationError::missing_year()),
        Some(value) => year_from_value(value)?,
    };
    if year < 1 {
        return Err(ValidationError::invalid_year_value(
            "'year' must be a positive integer (greater than 0).",
        ));
    }

    Ok(ValuationRequest {
        model: model.to_string(),
        year,
    })
}

fn year_from_value(value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::String(text) => {
            if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(ValidationError::invalid_year_format());
            }
            text.parse::<i64>().map_err(|_| {
                ValidationError::invalid_year_value("'year' is outside the supported range.")
            })
        }
        Value::Number(number) => match json_integer(number) {
            Some(year) => Ok(year),
            None => {
                let fractional = number.as_f64().map_or(false, |raw| raw.fract() != 0.0);
                if fractional {
                    Err(ValidationError::invalid_year_value(
                        "'year' must be an integer (no decimals).",
                    ))
                } else {
                    Err(ValidationError::invalid_year_value(
                        "'year' is outside the supported range.",
                    ))
                }
            }
        },
        Value::Null => Err(ValidationError::invalid_year_value("'year' cannot be null.")),
        _ => Err(ValidationError::invalid_year_value("'year' must be a number.")),
    }
}
