//! Quoting calculators behind the public API endpoints.
//!
//! Each calculator is a pure function over an untyped JSON payload: callers
//! send hand-built request bodies, so every endpoint re-validates shape and
//! types itself instead of leaning on serde rejecting the request wholesale.
//! Valuation is the involved one (single and batch shapes with a stable
//! error-code taxonomy); risk, premium, and discount are single-shot
//! calculators with plain-text error messages.

pub mod discount;
pub mod premium;
pub mod risk;
pub mod valuation;

pub use discount::{discount_rate, DiscountError, DiscountRate};
pub use premium::{quote_premium, PremiumError, PremiumQuote};
pub use risk::{rate_claim_history, RiskRating, RiskRatingError};
pub use valuation::{
    appraise_batch, validate_request, valuation_router, BatchReport, ItemOutcome, ItemResult,
    ValidationError, ValuationErrorCode, ValuationRequest,
};

/// Integer reading of a JSON number. Zero-fraction floats count (a payload
/// carrying `2014.0` means 2014), values outside i64 do not.
pub(crate) fn json_integer(number: &serde_json::Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }

    let value = number.as_f64()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // i64::MAX itself is not exactly representable as f64; stay inside the
    // band of floats that round-trip.
    if value < -(2f64.powi(63)) || value >= 2f64.powi(63) {
        return None;
    }
    Some(value as i64)
}
