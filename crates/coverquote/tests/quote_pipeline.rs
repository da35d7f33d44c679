//! Scenarios that walk a quote across the calculator boundaries the way the
//! frontend does: appraise the car, rate the claim history, then price the
//! premium from the two results.

mod pipeline {
    use serde_json::json;

    use coverquote::quoting::{quote_premium, rate_claim_history, validate_request};

    #[test]
    fn a_full_quote_flows_from_valuation_to_premium() {
        let request = validate_request(&json!({ "model": "Civic", "year": 2020 }))
            .expect("valid car request");
        let car_value = request.appraised_value().expect("within range");
        assert_eq!(car_value, 6620);

        let rating = rate_claim_history(&json!({
            "claim_history": "One crash on the motorway and a scratch in a car park"
        }))
        .expect("ratable history");
        assert_eq!(rating.risk_rating, 2);

        let quote = quote_premium(&json!({
            "car_value": car_value,
            "risk_rating": rating.risk_rating,
        }))
        .expect("quotable inputs");
        assert_eq!(quote.yearly_premium, 132.4);
        assert_eq!(quote.monthly_premium, 11.03);
    }

    #[test]
    fn an_unratable_history_stops_the_pipeline() {
        let rating = rate_claim_history(&json!({ "claim_history": "spotless record" }));
        assert_eq!(
            rating.expect_err("no risky events").to_string(),
            "No risky events"
        );
    }

    #[test]
    fn premium_errors_read_like_the_wire_contract() {
        let missing = quote_premium(&json!({})).expect_err("missing inputs");
        assert_eq!(
            missing.to_string(),
            "Missing input: car_value and risk_rating are required."
        );

        let mistyped = quote_premium(&json!({ "car_value": "6614", "risk_rating": 3 }))
            .expect_err("string car value");
        assert_eq!(
            mistyped.to_string(),
            "Invalid input types: car_value and risk_rating must be numbers."
        );

        let out_of_range = quote_premium(&json!({ "car_value": 6614, "risk_rating": 9 }))
            .expect_err("rating out of range");
        assert_eq!(
            out_of_range.to_string(),
            "Invalid input: car_value must be > 0 and risk_rating must be an integer between 1 and 5."
        );
    }
}

mod valuation_properties {
    use coverquote::quoting::valuation::alphabet_sum;
    use coverquote::quoting::ValuationRequest;

    #[test]
    fn only_letters_feed_the_model_component() {
        assert_eq!(alphabet_sum("Civic"), alphabet_sum("C-i v.i c!"));
        assert_eq!(alphabet_sum("911"), 0);
        assert_eq!(alphabet_sum("Škoda"), alphabet_sum("koda"));
    }

    #[test]
    fn the_year_adds_linearly() {
        let appraise = |year| {
            ValuationRequest {
                model: "Corolla".to_string(),
                year,
            }
            .appraised_value()
            .expect("within range")
        };
        assert_eq!(appraise(2014), appraise(2000) + 14);
    }

    #[test]
    fn extreme_years_overflow_cleanly() {
        let request = ValuationRequest {
            model: "Corolla".to_string(),
            year: i64::MAX,
        };
        let fault = request.appraised_value().expect_err("overflow");
        assert!(fault.to_string().contains("Corolla"));
    }
}

mod discount_ladder {
    use serde_json::json;

    use coverquote::quoting::discount_rate;

    #[test]
    fn experienced_older_drivers_reach_the_cap() {
        let rated = discount_rate(&json!({ "age": 45, "yearsOfExperience": 15 }))
            .expect("valid driver");
        assert_eq!(rated.discount, 20);
    }

    #[test]
    fn young_drivers_with_implausible_experience_get_nothing() {
        let rated = discount_rate(&json!({ "age": 20, "yearsOfExperience": 10 }))
            .expect("valid driver");
        assert_eq!(rated.discount, 0);
    }

    #[test]
    fn validation_messages_match_the_wire_contract() {
        let mistyped = discount_rate(&json!({ "age": "45", "yearsOfExperience": 15 }))
            .expect_err("string age");
        assert_eq!(
            mistyped.to_string(),
            "Invalid input: age and yearsOfExperience must be numbers."
        );

        let negative = discount_rate(&json!({ "age": -1, "yearsOfExperience": 15 }))
            .expect_err("negative age");
        assert_eq!(
            negative.to_string(),
            "Invalid input: age and yearsOfExperience must be non-negative."
        );
    }
}
