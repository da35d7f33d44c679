//! Car valuation: request validation, appraisal, and batch aggregation.
//!
//! This is the one endpoint with structure to it. Requests arrive either as a
//! single object or as an ordered array of items; each item is validated
//! field by field against a fixed error-code taxonomy, and batch responses
//! echo every item back in order with either a `carValue` or an
//! `error`/`errorCode` pair attached. A single bad item turns the overall
//! batch status into a 400 without suppressing the other items' results.

mod appraisal;
mod batch;
mod router;
mod validate;

#[cfg(test)]
mod tests;

pub use appraisal::{alphabet_sum, AppraisalOverflow, ValuationRequest};
pub use batch::{appraise_batch, BatchReport, ItemOutcome, ItemResult};
pub use router::valuation_router;
pub use validate::{validate_request, ValidationError, ValuationErrorCode};
