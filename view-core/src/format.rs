//! Display formatting shared by the view models

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Status label for a fraud verdict
pub fn status_label(is_fraud: bool) -> &'static str {
    if is_fraud {
        "Fraudulent"
    } else {
        "Legitimate"
    }
}

/// Dollar amount at two decimals, e.g. `$100.50`
pub fn amount_display(amount: Decimal) -> String {
    format!("${:.2}", amount.to_f64().unwrap_or(0.0))
}

/// Risk score at two decimals
pub fn risk_score_display(risk_score: f64) -> String {
    format!("{risk_score:.2}")
}

/// Fraud probability as a percentage at two decimals, e.g. `5.00%`
pub fn probability_display(fraud_probability: f64) -> String {
    format!("{:.2}%", fraud_probability * 100.0)
}
