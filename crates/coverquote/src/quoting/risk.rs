//! Claim history risk rating.
//!
//! The rating is the number of risky-event keywords found in the free-text
//! claim history. Matching is case-insensitive and substring-based, so
//! "Crashed" and "scratches" both count. A history with no risky events or
//! with more than five cannot be rated and is rejected.

use serde::Serialize;
use serde_json::Value;

const RISKY_KEYWORDS: [&str; 5] = ["crash", "scratch", "collide", "bump", "smash"];
const MAX_RISKY_EVENTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskRating {
    pub risk_rating: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RiskRatingError {
    /// The payload had no usable `claim_history` string.
    #[error("Invalid input entered")]
    InvalidInput,
    /// Kept verbatim from the public contract, typo and all.
    #[error("To many risky events")]
    TooManyRiskyEvents,
    #[error("No risky events")]
    NoRiskyEvents,
}

/// Count keyword occurrences in a claim history. Occurrences of the same
/// keyword all count; overlapping matches do not.
pub fn count_risky_events(claim_history: &str) -> usize {
    let text = claim_history.to_lowercase();
    RISKY_KEYWORDS
        .iter()
        .map(|keyword| text.matches(keyword).count())
        .sum()
}

/// Rate the `claim_history` field of a risk-rating payload.
///
/// Anything other than a non-blank string (missing field, null, numbers,
/// arrays) is one undifferentiated invalid input.
pub fn rate_claim_history(payload: &Value) -> Result<RiskRating, RiskRatingError> {
    let claim_history = payload
        .get("claim_history")
        .and_then(Value::as_str)
        .ok_or(RiskRatingError::InvalidInput)?;
    if claim_history.trim().is_empty() {
        return Err(RiskRatingError::InvalidInput);
    }

    let risk_rating = count_risky_events(claim_history);
    if risk_rating > MAX_RISKY_EVENTS {
        return Err(RiskRatingError::TooManyRiskyEvents);
    }
    if risk_rating == 0 {
        return Err(RiskRatingError::NoRiskyEvents);
    }
    Ok(RiskRating { risk_rating })
}
