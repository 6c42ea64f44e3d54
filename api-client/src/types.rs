//! Wire contracts for the FraudShield service
//!
//! These structs mirror the JSON payloads exactly; decoding fails closed
//! when a payload does not match. All values are immutable once decoded.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction category accepted by the scoring service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Card purchase
    Purchase,
    /// Cash withdrawal
    Withdrawal,
    /// Account-to-account transfer
    Transfer,
}

impl TransactionType {
    /// All accepted categories, in display order
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Purchase,
        TransactionType::Withdrawal,
        TransactionType::Transfer,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Purchase => "purchase",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Transfer => "transfer",
        }
    }

    /// Parse the wire representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "purchase" => Some(TransactionType::Purchase),
            "withdrawal" => Some(TransactionType::Withdrawal),
            "transfer" => Some(TransactionType::Transfer),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transaction submitted for fraud evaluation
///
/// Built by the form model after local validation, sent once, never
/// persisted. `timestamp` carries the operator-entered local wall-clock
/// string; the service parses it on its side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCheckRequest {
    /// Transaction amount (positive)
    pub amount: Decimal,

    /// ISO-8601 local date-time string, no timezone
    pub timestamp: String,

    /// Merchant identifier
    pub merchant_id: String,

    /// Card number, exactly 16 digits
    pub card_number: String,

    /// Transaction category
    pub transaction_type: TransactionType,

    /// Free-form location, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Opaque extra attributes, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<serde_json::Value>,
}

/// Evaluation outcome for one submitted transaction
///
/// Ephemeral: owned by the submitting view until replaced or unmounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCheckResult {
    /// Server-assigned transaction identifier
    pub transaction_id: String,

    /// Model-estimated fraud probability, in [0, 1]
    pub fraud_probability: f64,

    /// Fraud verdict
    pub is_fraud: bool,

    /// Numeric severity indicator, higher is riskier
    pub risk_score: f64,

    /// Ordered human-readable reasons, may be empty
    #[serde(default)]
    pub explanation: Vec<String>,
}

/// A historical evaluation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Record identifier
    pub id: i64,

    /// Evaluated transaction identifier
    pub transaction_id: String,

    /// Transaction amount
    pub amount: Decimal,

    /// Evaluation instant
    pub timestamp: DateTime<Utc>,

    /// Fraud verdict
    pub is_fraud: bool,

    /// Numeric severity indicator
    pub risk_score: f64,

    /// Ordered human-readable reasons, if recorded
    pub explanation: Option<Vec<String>>,
}

/// Aggregate risk statistics for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total evaluated transactions
    pub total_transactions: u64,

    /// Transactions flagged as fraudulent
    pub fraud_count: u64,

    /// Transactions cleared as legitimate
    pub legitimate_count: u64,

    /// Mean risk score across all evaluations
    pub average_risk_score: f64,
}

impl DashboardStats {
    /// Whether the counts add up to at most the reported total
    ///
    /// The server is expected to uphold this; the client only observes it
    /// and must keep rendering when it does not hold.
    pub fn counts_consistent(&self) -> bool {
        self.fraud_count.saturating_add(self.legitimate_count) <= self.total_transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_dashboard_stats_camel_case() {
        let body = r#"{
            "totalTransactions": 100,
            "fraudCount": 5,
            "legitimateCount": 95,
            "averageRiskScore": 12.5
        }"#;

        let stats: DashboardStats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.total_transactions, 100);
        assert_eq!(stats.fraud_count, 5);
        assert_eq!(stats.legitimate_count, 95);
        assert!(stats.counts_consistent());
    }

    #[test]
    fn test_inconsistent_counts_still_decode() {
        let body = r#"{
            "totalTransactions": 10,
            "fraudCount": 8,
            "legitimateCount": 8,
            "averageRiskScore": 0.0
        }"#;

        let stats: DashboardStats = serde_json::from_str(body).unwrap();
        assert!(!stats.counts_consistent());
    }

    #[test]
    fn test_decode_alerts_preserves_order() {
        let body = r#"[
            {"id": 2, "transaction_id": "tx-2", "amount": 25.00,
             "timestamp": "2024-03-02T09:00:00Z", "is_fraud": true,
             "risk_score": 88.1, "explanation": ["Unusual merchant"]},
            {"id": 1, "transaction_id": "tx-1", "amount": 10.50,
             "timestamp": "2024-03-01T12:00:00Z", "is_fraud": false,
             "risk_score": 3.2}
        ]"#;

        let alerts: Vec<AlertRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].id, 2);
        assert_eq!(alerts[1].id, 1);
        assert_eq!(alerts[0].amount, dec!(25.00));
        assert_eq!(
            alerts[0].explanation.as_deref(),
            Some(&["Unusual merchant".to_string()][..])
        );
        assert!(alerts[1].explanation.is_none());
    }

    #[test]
    fn test_request_serializes_optional_fields_only_when_present() {
        let request = TransactionCheckRequest {
            amount: dec!(100.50),
            timestamp: "2024-03-01T12:30".to_string(),
            merchant_id: "MERCH-001".to_string(),
            card_number: "4111111111111111".to_string(),
            transaction_type: TransactionType::Purchase,
            location: None,
            additional_data: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["transaction_type"], "purchase");
        assert!(value.get("location").is_none());
        assert!(value.get("additional_data").is_none());

        let with_location = TransactionCheckRequest {
            location: Some("Berlin".to_string()),
            ..request
        };
        let value = serde_json::to_value(&with_location).unwrap();
        assert_eq!(value["location"], "Berlin");
    }

    #[test]
    fn test_result_decodes_missing_explanation_as_empty() {
        let body = r#"{
            "transaction_id": "tx-9",
            "fraud_probability": 0.05,
            "is_fraud": false,
            "risk_score": 5.0
        }"#;

        let result: TransactionCheckResult = serde_json::from_str(body).unwrap();
        assert!(result.explanation.is_empty());
        assert!(!result.is_fraud);
    }

    #[test]
    fn test_transaction_type_round_trip() {
        for ty in TransactionType::ALL {
            assert_eq!(TransactionType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(TransactionType::parse("refund"), None);
    }
}
