//! Driver discount rate.
//!
//! Discounts accrue in 5% steps for age and driving experience thresholds,
//! capped at 20%. Young drivers claiming a long driving history (under 25
//! with more than five years behind the wheel) get no discount at all.

use serde::Serialize;
use serde_json::Value;

const MIN_AGE_FOR_DISCOUNT: f64 = 25.0;
const MIN_YEARS_FOR_DISCOUNT: f64 = 5.0;
const SENIOR_AGE: f64 = 40.0;
const SENIOR_YEARS: f64 = 10.0;
const DISCOUNT_STEP: u8 = 5;
const MAX_DISCOUNT: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountRate {
    pub discount: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscountError {
    #[error("Invalid input: age and yearsOfExperience must be numbers.")]
    NotNumbers,
    #[error("Invalid input: age and yearsOfExperience must be non-negative.")]
    Negative,
}

/// The discount ladder for inputs that already passed validation.
pub fn rate_for(age: f64, years_of_experience: f64) -> u8 {
    if age < MIN_AGE_FOR_DISCOUNT && years_of_experience > MIN_YEARS_FOR_DISCOUNT {
        return 0;
    }
    let mut rate = 0;
    if age >= MIN_AGE_FOR_DISCOUNT {
        rate += DISCOUNT_STEP;
    }
    if years_of_experience >= MIN_YEARS_FOR_DISCOUNT {
        rate += DISCOUNT_STEP;
    }
    if age >= SENIOR_AGE {
        rate += DISCOUNT_STEP;
    }
    if years_of_experience >= SENIOR_YEARS {
        rate += DISCOUNT_STEP;
    }
    rate.min(MAX_DISCOUNT)
}

/// Rate the `age` and `yearsOfExperience` fields of a discount payload.
/// Fractional inputs are fine; only missing or non-numeric fields and
/// negative values are rejected.
pub fn discount_rate(payload: &Value) -> Result<DiscountRate, DiscountError> {
    let age = payload.get("age").and_then(Value::as_f64);
    let years = payload.get("yearsOfExperience").and_then(Value::as_f64);
    let (Some(age), Some(years_of_experience)) = (age, years) else {
        return Err(DiscountError::NotNumbers);
    };
    if age < 0.0 || years_of_experience < 0.0 {
        return Err(DiscountError::Negative);
    }
    Ok(DiscountRate {
        discount: rate_for(age, years_of_experience),
    })
}
