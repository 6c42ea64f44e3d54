//! HTTP client for the FraudShield service
//!
//! One outbound request per operation: no retries, no caching, no explicit
//! timeout (transport defaults apply). Responses are read as text first so
//! transport, status, and schema failures classify independently.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{
    AlertRecord, DashboardStats, TransactionCheckRequest, TransactionCheckResult,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

const DASHBOARD_STATS_PATH: &str = "/api/dashboard-stats";
const ALERTS_PATH: &str = "/api/alerts";
const CHECK_TRANSACTION_PATH: &str = "/api/check-transaction";
const HEALTH_PATH: &str = "/api/health";

/// Rejection body shape used by the service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Typed client for the FraudShield HTTP API
#[derive(Debug)]
pub struct RiskApiClient {
    config: ClientConfig,
    client: Client,
}

impl RiskApiClient {
    /// Create a new client for the configured service
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch aggregate risk statistics
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.get_json(DASHBOARD_STATS_PATH).await
    }

    /// Fetch historical alerts, in server order
    ///
    /// An empty list is a valid success.
    pub async fn get_alerts(&self) -> Result<Vec<AlertRecord>> {
        self.get_json(ALERTS_PATH).await
    }

    /// Submit one transaction for fraud evaluation
    pub async fn submit_transaction_check(
        &self,
        request: &TransactionCheckRequest,
    ) -> Result<TransactionCheckResult> {
        info!(
            merchant_id = %request.merchant_id,
            transaction_type = %request.transaction_type,
            "Submitting transaction for evaluation"
        );

        let url = format!("{}{}", self.config.base_url, CHECK_TRANSACTION_PATH);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        decode_response(response).await
    }

    /// Probe service liveness
    pub async fn health_check(&self) -> Result<()> {
        let url = format!("{}{}", self.config.base_url, HEALTH_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = response
                .text()
                .await
                .map_err(|e| Error::Network(e.to_string()))?;
            Err(backend_error(status, &text))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T> {
        debug!(path, "Fetching");

        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        decode_response(response).await
    }
}

/// Decode a success payload, or classify the failure
async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(backend_error(status, &text));
    }

    serde_json::from_str(&text).map_err(|e| Error::Decode(e.to_string()))
}

fn backend_error(status: StatusCode, body: &str) -> Error {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.detail);

    Error::Backend {
        status: status.as_u16(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_parses_detail_body() {
        let err = backend_error(StatusCode::UNPROCESSABLE_ENTITY, r#"{"detail":"bad card"}"#);
        match err {
            Error::Backend { status, detail } => {
                assert_eq!(status, 422);
                assert_eq!(detail.as_deref(), Some("bad card"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_backend_error_without_detail_body() {
        let err = backend_error(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");
        match err {
            Error::Backend { status, detail } => {
                assert_eq!(status, 500);
                assert!(detail.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
