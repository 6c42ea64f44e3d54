// FraudShield Console - terminal front end for the fraud evaluation service
// Mounts the dashboard, alerts, and transaction-check views against a live service

use anyhow::Result;
use api_client::{ClientConfig, RiskApiClient};
use tracing::{info, warn};
use view_core::{AlertsRender, AlertsView, DashboardView, TransactionCheckView};

mod render;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ClientConfig::from_env();
    info!("🛡️  FraudShield console starting, service at {}", config.base_url);

    let client = RiskApiClient::new(config)?;

    match client.health_check().await {
        Ok(()) => info!("✅ Service is healthy"),
        Err(e) => warn!("⚠️  Health probe failed: {}", e),
    }

    show_dashboard(&client).await;
    show_alerts(&client).await;
    run_sample_check(&client).await;

    Ok(())
}

async fn show_dashboard(client: &RiskApiClient) {
    render::heading("Dashboard");

    let mut view = DashboardView::new();
    view.refresh(client).await;

    match (view.cards(), view.distribution()) {
        (Some(cards), Some(series)) => render::dashboard(&cards, &series),
        _ => {
            if let Some(message) = view.state().error_message() {
                render::view_error(message);
            }
        }
    }
}

async fn show_alerts(client: &RiskApiClient) {
    render::heading("Fraud Alerts");

    let mut view = AlertsView::new();
    view.refresh(client).await;

    match view.render() {
        AlertsRender::Rows(rows) => {
            for row in &rows {
                render::alert_row(row);
            }
        }
        AlertsRender::Empty => render::alerts_empty(),
        AlertsRender::Failed(message) => render::view_error(&message),
        AlertsRender::Idle | AlertsRender::Loading => {}
    }
}

async fn run_sample_check(client: &RiskApiClient) {
    render::heading("Check Transaction");

    let mut view = TransactionCheckView::new();
    view.form.amount = "1250.00".to_string();
    view.form.merchant_id = "MERCH-0042".to_string();
    view.form.card_number = "4111111111111111".to_string();
    view.form.location = "Berlin, DE".to_string();

    match view.submit(client).await {
        Ok(()) => match view.report() {
            Some(report) => render::prediction(&report),
            None => {
                if let Some(message) = view.state().error_message() {
                    render::view_error(message);
                }
            }
        },
        Err(errors) => {
            for error in &errors {
                render::view_error(&error.to_string());
            }
        }
    }
}
