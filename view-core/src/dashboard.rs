//! Dashboard view: aggregate statistics and their derived series

use crate::format;
use crate::state::{AsyncViewState, FetchState};
use api_client::{DashboardStats, RiskApiClient};
use tracing::warn;

/// Category labels for the distribution series, in value order
pub const DISTRIBUTION_LABELS: [&str; 2] = ["Legitimate", "Fraudulent"];

/// Two-category proportion series for the distribution chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionSeries {
    /// `[legitimate_count, fraud_count]`, matching [`DISTRIBUTION_LABELS`]
    pub values: [u64; 2],
}

/// Render-ready stat cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCards {
    /// Total evaluated transactions
    pub total_transactions: u64,
    /// Transactions flagged as fraudulent
    pub fraud_count: u64,
    /// Transactions cleared as legitimate
    pub legitimate_count: u64,
    /// Average risk score at two decimals
    pub average_risk_score_display: String,
}

/// Build the distribution series for proportion display
///
/// Inconsistent counts still render; the mismatch is only logged.
pub fn distribution(stats: &DashboardStats) -> DistributionSeries {
    if !stats.counts_consistent() {
        warn!(
            total = stats.total_transactions,
            fraud = stats.fraud_count,
            legitimate = stats.legitimate_count,
            "Verdict counts exceed the reported total"
        );
    }

    DistributionSeries {
        values: [stats.legitimate_count, stats.fraud_count],
    }
}

/// Build the stat cards
pub fn stat_cards(stats: &DashboardStats) -> StatCards {
    StatCards {
        total_transactions: stats.total_transactions,
        fraud_count: stats.fraud_count,
        legitimate_count: stats.legitimate_count,
        average_risk_score_display: format::risk_score_display(stats.average_risk_score),
    }
}

/// Dashboard view controller
#[derive(Debug)]
pub struct DashboardView {
    state: FetchState<DashboardStats>,
}

impl DashboardView {
    /// Fresh, idle dashboard view
    pub fn new() -> Self {
        Self {
            state: FetchState::for_resource("dashboard data"),
        }
    }

    /// Lifecycle of the latest fetch
    pub fn state(&self) -> &AsyncViewState<DashboardStats> {
        self.state.state()
    }

    /// Fetch fresh statistics, replacing whatever is displayed
    pub async fn refresh(&mut self, client: &RiskApiClient) {
        let generation = self.state.begin();
        let outcome = client.get_dashboard_stats().await;
        self.state.resolve(generation, outcome);
    }

    /// Stat cards for the latest successful fetch
    pub fn cards(&self) -> Option<StatCards> {
        self.state.state().data().map(stat_cards)
    }

    /// Distribution series for the latest successful fetch
    pub fn distribution(&self) -> Option<DistributionSeries> {
        self.state.state().data().map(distribution)
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}
