//! Core quoting domain for the coverquote service.
//!
//! The service exposes four independent calculators over HTTP: car valuation
//! (with single and batch request shapes), claim-history risk rating, premium
//! quoting, and driver discount rates. This crate owns the calculators, the
//! valuation input-validation core, configuration, and telemetry; the HTTP
//! binary in `services/api` assembles them into a server.

pub mod config;
pub mod error;
pub mod quoting;
pub mod telemetry;
