use serde::{Deserialize, Serialize};

/// A valuation request that already passed validation: `model` is a
/// non-blank string and `year` a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub model: String,
    pub year: i64,
}

/// Sum of 1-indexed alphabet positions over the ASCII letters of `model`
/// ('a'/'A' = 1 .. 'z'/'Z' = 26). Anything else contributes nothing, so
/// digits, punctuation, and whitespace never move an appraisal.
pub fn alphabet_sum(model: &str) -> i64 {
    model
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|letter| i64::from(letter.to_ascii_lowercase() - b'a') + 1)
        .sum()
}

/// Raised when the appraisal arithmetic leaves i64. Only reachable with a
/// year close to i64::MAX, but the batch error taxonomy needs a concrete
/// internal-fault path rather than a panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("car value arithmetic overflowed for model '{model}' year {year}")]
pub struct AppraisalOverflow {
    pub model: String,
    pub year: i64,
}

impl ValuationRequest {
    /// Appraise the car: `alphabet_sum(model) * 100 + year`. With year >= 1
    /// and a non-negative letter sum the result is always positive.
    pub fn appraised_value(&self) -> Result<i64, AppraisalOverflow> {
        alphabet_sum(&self.model)
            .checked_mul(100)
            .and_then(|scaled| scaled.checked_add(self.year))
            .ok_or_else(|| AppraisalOverflow {
                model: self.model.clone(),
                year: self.year,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appraise(model: &str, year: i64) -> i64 {
        ValuationRequest {
            model: model.to_string(),
            year,
        }
        .appraised_value()
        .expect("appraisal fits i64")
    }

    #[test]
    fn civic_2014_appraises_to_6614() {
        // C=3, i=9, v=22, i=9, c=3 -> 46 * 100 + 2014
        assert_eq!(appraise("Civic", 2014), 6614);
    }

    #[test]
    fn single_letter_model() {
        assert_eq!(appraise("A", 2000), 2100);
    }

    #[test]
    fn appraisal_ignores_case() {
        assert_eq!(appraise("cIvIc", 2014), appraise("CIVIC", 2014));
        assert_eq!(appraise("civic", 2014), appraise("Civic", 2014));
    }

    #[test]
    fn non_letters_contribute_nothing() {
        assert_eq!(alphabet_sum("!@#$%"), 0);
        assert_eq!(appraise("!@#$%", 2020), 2020);
        assert_eq!(appraise("C!v!c", 2020), 4820);
    }

    #[test]
    fn multibyte_text_is_ignored_like_punctuation() {
        assert_eq!(alphabet_sum("Škoda"), alphabet_sum("koda"));
    }

    #[test]
    fn absurd_year_overflows_instead_of_wrapping() {
        let request = ValuationRequest {
            model: "Civic".to_string(),
            year: i64::MAX,
        };
        let err = request.appraised_value().expect_err("must overflow");
        assert_eq!(err.year, i64::MAX);
    }
}
