//! Premium quoting from an appraised car value and a risk rating.
//!
//! Yearly premium is `car_value * risk_rating` percent, kept to four decimal
//! places; the monthly premium is one twelfth of that, kept to two. Both are
//! returned as JSON numbers.

use serde::Serialize;
use serde_json::Value;

use super::json_integer;

const MIN_RISK_RATING: i64 = 1;
const MAX_RISK_RATING: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PremiumQuote {
    pub monthly_premium: f64,
    pub yearly_premium: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PremiumError {
    #[error("Missing input: car_value and risk_rating are required.")]
    MissingInput,
    #[error("Invalid input types: car_value and risk_rating must be numbers.")]
    InvalidTypes,
    #[error("Invalid input: car_value must be > 0 and risk_rating must be an integer between 1 and 5.")]
    OutOfRange,
}

/// Premiums for inputs that already passed validation.
pub fn premium_for(car_value: f64, risk_rating: i64) -> PremiumQuote {
    let yearly = round_to(car_value * risk_rating as f64 * 0.01, 4);
    let monthly = round_to(yearly / 12.0, 2);
    PremiumQuote {
        monthly_premium: monthly,
        yearly_premium: yearly,
    }
}

/// Quote from a raw payload carrying `car_value` and `risk_rating`.
///
/// Presence is checked before types: a payload missing either field reports
/// the missing-input error even if the other field is junk. Null is present
/// but not a number, so it fails the type check. An integer-valued float
/// rating (`5.0`) is accepted; a fractional one is out of range.
pub fn quote_premium(payload: &Value) -> Result<PremiumQuote, PremiumError> {
    let (Some(car_value), Some(risk_rating)) =
        (payload.get("car_value"), payload.get("risk_rating"))
    else {
        return Err(PremiumError::MissingInput);
    };
    let (Value::Number(car_value), Value::Number(risk_rating)) = (car_value, risk_rating) else {
        return Err(PremiumError::InvalidTypes);
    };
    let Some(car_value) = car_value.as_f64() else {
        return Err(PremiumError::OutOfRange);
    };
    let risk_rating = json_integer(risk_rating).ok_or(PremiumError::OutOfRange)?;

    if car_value <= 0.0 || !(MIN_RISK_RATING..=MAX_RISK_RATING).contains(&risk_rating) {
        return Err(PremiumError::OutOfRange);
    }
    Ok(premium_for(car_value, risk_rating))
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
