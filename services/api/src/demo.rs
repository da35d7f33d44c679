use clap::Args;
use serde_json::json;

use coverquote::error::AppError;
use coverquote::quoting::{discount_rate, quote_premium, rate_claim_history, validate_request};

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Car model to value, for example "Civic"
    #[arg(long)]
    pub(crate) model: String,
    /// Model year, for example 2020
    #[arg(long)]
    pub(crate) year: i64,
    /// Claim history text to rate, for example "One crash and a scratch"
    #[arg(long)]
    pub(crate) claim_history: String,
    /// Driver age, used with --years-of-experience for the discount
    #[arg(long)]
    pub(crate) age: Option<f64>,
    /// Years of driving experience, used with --age for the discount
    #[arg(long)]
    pub(crate) years_of_experience: Option<f64>,
}

/// Price a single quote end to end and print every intermediate figure. The
/// calculators normally answer HTTP requests independently; this chains them
/// the way the frontend does, stopping at the first input an endpoint would
/// reject.
pub(crate) fn run_quote_demo(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        model,
        year,
        claim_history,
        age,
        years_of_experience,
    } = args;

    println!("Car insurance quote demo");

    let request = match validate_request(&json!({ "model": model, "year": year })) {
        Ok(request) => request,
        Err(err) => {
            println!("  Car rejected: {}", err);
            return Ok(());
        }
    };
    let car_value = match request.appraised_value() {
        Ok(value) => value,
        Err(err) => {
            println!("  Appraisal unavailable: {}", err);
            return Ok(());
        }
    };
    println!(
        "- {} ({}) appraised at {}",
        request.model, request.year, car_value
    );

    let rating = match rate_claim_history(&json!({ "claim_history": claim_history })) {
        Ok(rating) => rating,
        Err(err) => {
            println!("  Claim history not ratable: {}", err);
            return Ok(());
        }
    };
    println!("- Claim history rates {} risky event(s)", rating.risk_rating);

    let quote = match quote_premium(&json!({
        "car_value": car_value,
        "risk_rating": rating.risk_rating,
    })) {
        Ok(quote) => quote,
        Err(err) => {
            println!("  Premium not quotable: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Premium: {} yearly / {} monthly",
        quote.yearly_premium, quote.monthly_premium
    );

    match (age, years_of_experience) {
        (Some(age), Some(years)) => {
            let rate = match discount_rate(&json!({ "age": age, "yearsOfExperience": years })) {
                Ok(rate) => rate,
                Err(err) => {
                    println!("  Discount unavailable: {}", err);
                    return Ok(());
                }
            };
            let keep = 1.0 - f64::from(rate.discount) / 100.0;
            println!(
                "- Driver discount: {}% -> {:.2} yearly / {:.2} monthly",
                rate.discount,
                quote.yearly_premium * keep,
                quote.monthly_premium * keep
            );
        }
        (None, None) => {
            println!("- Driver discount: skipped (pass --age and --years-of-experience)");
        }
        _ => {
            println!("- Driver discount: both --age and --years-of-experience are required");
        }
    }

    Ok(())
}
