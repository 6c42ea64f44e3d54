//! Alerts view: historical records in server order

use crate::format;
use crate::state::{AsyncViewState, FetchState};
use api_client::{AlertRecord, RiskApiClient};
use chrono::Local;

/// Placeholder shown for a successful fetch with no records
pub const NO_ALERTS_PLACEHOLDER: &str = "No alerts found";

/// Render-ready alert row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRow {
    /// Evaluated transaction identifier
    pub transaction_id: String,
    /// Amount at two decimals with currency sign
    pub amount_display: String,
    /// Risk score at two decimals
    pub risk_score_display: String,
    /// `Fraudulent` or `Legitimate`
    pub status_label: &'static str,
    /// Fraud verdict backing the label
    pub is_fraud: bool,
    /// Localized evaluation instant
    pub timestamp_display: String,
    /// Ordered reasons; empty when the record carried none
    pub explanation: Vec<String>,
}

/// Transform records into rows, preserving server order
///
/// No client-side sort or filter.
pub fn rows(records: &[AlertRecord]) -> Vec<AlertRow> {
    records
        .iter()
        .map(|record| AlertRow {
            transaction_id: record.transaction_id.clone(),
            amount_display: format::amount_display(record.amount),
            risk_score_display: format::risk_score_display(record.risk_score),
            status_label: format::status_label(record.is_fraud),
            is_fraud: record.is_fraud,
            timestamp_display: record
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            explanation: record.explanation.clone().unwrap_or_default(),
        })
        .collect()
}

/// What the alerts view renders
#[derive(Debug, Clone, PartialEq)]
pub enum AlertsRender {
    /// Nothing fetched yet
    Idle,
    /// A fetch is outstanding
    Loading,
    /// The fetch failed; carries the collapsed message
    Failed(String),
    /// Successful fetch with no records
    Empty,
    /// Successful fetch
    Rows(Vec<AlertRow>),
}

/// Alerts view controller
#[derive(Debug)]
pub struct AlertsView {
    state: FetchState<Vec<AlertRecord>>,
}

impl AlertsView {
    /// Fresh, idle alerts view
    pub fn new() -> Self {
        Self {
            state: FetchState::for_resource("alerts"),
        }
    }

    /// Lifecycle of the latest fetch
    pub fn state(&self) -> &AsyncViewState<Vec<AlertRecord>> {
        self.state.state()
    }

    /// Fetch the alert list, replacing whatever is displayed
    pub async fn refresh(&mut self, client: &RiskApiClient) {
        let generation = self.state.begin();
        let outcome = client.get_alerts().await;
        self.state.resolve(generation, outcome);
    }

    /// Render-ready content for the current state
    ///
    /// An empty list renders [`AlertsRender::Empty`], which is distinct
    /// from [`AlertsRender::Failed`].
    pub fn render(&self) -> AlertsRender {
        match self.state.state() {
            AsyncViewState::Idle => AlertsRender::Idle,
            AsyncViewState::Loading => AlertsRender::Loading,
            AsyncViewState::Error(message) => AlertsRender::Failed(message.clone()),
            AsyncViewState::Success(records) if records.is_empty() => AlertsRender::Empty,
            AsyncViewState::Success(records) => AlertsRender::Rows(rows(records)),
        }
    }
}

impl Default for AlertsView {
    fn default() -> Self {
        Self::new()
    }
}
