//! Transaction form model and local validation
//!
//! The form holds string drafts of every field. Validation runs before any
//! submission; when it fails, the submission is blocked and no network call
//! is made.

use crate::format;
use crate::state::{AsyncViewState, FetchState};
use api_client::{
    RiskApiClient, TransactionCheckRequest, TransactionCheckResult, TransactionType,
};
use chrono::{Local, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

lazy_static! {
    static ref CARD_NUMBER_RE: Regex = Regex::new(r"^[0-9]{16}$").expect("valid regex");
}

/// Accepted timestamp layouts: datetime-local, with or without seconds
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Draft timestamp layout used for the pre-filled default
const DRAFT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Failure message shown when the service gives no detail
const SUBMIT_FALLBACK: &str = "An error occurred while checking the transaction";

/// Form fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Transaction amount
    Amount,
    /// Transaction timestamp
    Timestamp,
    /// Merchant identifier
    MerchantId,
    /// Card number
    CardNumber,
    /// Transaction category
    TransactionType,
}

impl Field {
    /// Operator-facing field label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Amount => "Amount",
            Field::Timestamp => "Timestamp",
            Field::MerchantId => "Merchant ID",
            Field::CardNumber => "Card Number",
            Field::TransactionType => "Transaction Type",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Offending field
    pub field: Field,
    /// Operator-facing message
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Mutable draft of a transaction check request
#[derive(Debug, Clone)]
pub struct TransactionForm {
    /// Amount draft
    pub amount: String,
    /// Timestamp draft, local wall-clock
    pub timestamp: String,
    /// Merchant identifier draft
    pub merchant_id: String,
    /// Card number draft
    pub card_number: String,
    /// Transaction category draft
    pub transaction_type: String,
    /// Optional location draft; empty means absent
    pub location: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            timestamp: Local::now().format(DRAFT_TIMESTAMP_FORMAT).to_string(),
            merchant_id: String::new(),
            card_number: String::new(),
            transaction_type: TransactionType::Purchase.as_str().to_string(),
            location: String::new(),
        }
    }
}

impl TransactionForm {
    /// Validate the draft and build the wire request
    ///
    /// Every failing field is reported at once; a request is only built
    /// when all checks pass.
    pub fn validate(&self) -> Result<TransactionCheckRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let amount = match Decimal::from_str(self.amount.trim()) {
            Ok(value) if value > Decimal::ZERO => Some(value),
            Ok(_) => {
                errors.push(FieldError::new(
                    Field::Amount,
                    "Amount must be greater than zero",
                ));
                None
            }
            Err(_) => {
                errors.push(FieldError::new(Field::Amount, "Amount must be a valid number"));
                None
            }
        };

        let timestamp = self.timestamp.trim();
        if !TIMESTAMP_FORMATS
            .iter()
            .any(|layout| NaiveDateTime::parse_from_str(timestamp, layout).is_ok())
        {
            errors.push(FieldError::new(
                Field::Timestamp,
                "Timestamp must be a valid date and time",
            ));
        }

        let merchant_id = self.merchant_id.trim();
        if merchant_id.is_empty() {
            errors.push(FieldError::new(Field::MerchantId, "Merchant ID is required"));
        }

        if !CARD_NUMBER_RE.is_match(&self.card_number) {
            errors.push(FieldError::new(
                Field::CardNumber,
                "Card number must be exactly 16 digits",
            ));
        }

        let transaction_type = match TransactionType::parse(&self.transaction_type) {
            Some(value) => Some(value),
            None => {
                errors.push(FieldError::new(
                    Field::TransactionType,
                    "Transaction type must be purchase, withdrawal, or transfer",
                ));
                None
            }
        };

        match (amount, transaction_type) {
            (Some(amount), Some(transaction_type)) if errors.is_empty() => {
                Ok(TransactionCheckRequest {
                    amount,
                    timestamp: timestamp.to_string(),
                    merchant_id: merchant_id.to_string(),
                    card_number: self.card_number.clone(),
                    transaction_type,
                    location: if self.location.is_empty() {
                        None
                    } else {
                        Some(self.location.clone())
                    },
                    additional_data: None,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Render-ready presentation of an evaluation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionReport {
    /// Fraud probability as a percentage at two decimals
    pub probability_display: String,
    /// Risk score at two decimals
    pub risk_score_display: String,
    /// `Fraudulent` or `Legitimate`
    pub status_label: &'static str,
    /// Fraud verdict backing the label
    pub is_fraud: bool,
    /// Ordered reasons, may be empty
    pub explanation: Vec<String>,
}

impl From<&TransactionCheckResult> for PredictionReport {
    fn from(result: &TransactionCheckResult) -> Self {
        Self {
            probability_display: format::probability_display(result.fraud_probability),
            risk_score_display: format::risk_score_display(result.risk_score),
            status_label: format::status_label(result.is_fraud),
            is_fraud: result.is_fraud,
            explanation: result.explanation.clone(),
        }
    }
}

/// Transaction-check view: a form plus the lifecycle of its submission
#[derive(Debug)]
pub struct TransactionCheckView {
    /// Editable draft
    pub form: TransactionForm,
    state: FetchState<TransactionCheckResult>,
}

impl TransactionCheckView {
    /// Fresh view with an empty draft
    pub fn new() -> Self {
        Self {
            form: TransactionForm::default(),
            state: FetchState::with_fallback(SUBMIT_FALLBACK),
        }
    }

    /// Lifecycle of the latest submission
    pub fn state(&self) -> &AsyncViewState<TransactionCheckResult> {
        self.state.state()
    }

    /// Render-ready report for the latest successful submission
    pub fn report(&self) -> Option<PredictionReport> {
        self.state.state().data().map(PredictionReport::from)
    }

    /// Validate the draft and submit it for evaluation
    ///
    /// Validation failure blocks submission: no state transition, no
    /// network call. Otherwise any previous result is cleared by `Loading`
    /// and the machine resolves with the call's outcome.
    pub async fn submit(&mut self, client: &RiskApiClient) -> Result<(), Vec<FieldError>> {
        let request = self.form.validate()?;

        let generation = self.state.begin();
        let outcome = client.submit_transaction_check(&request).await;
        self.state.resolve(generation, outcome);

        Ok(())
    }
}

impl Default for TransactionCheckView {
    fn default() -> Self {
        Self::new()
    }
}
