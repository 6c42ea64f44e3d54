//! View-layer core for the FraudShield client
//!
//! The fetch-lifecycle state machine shared by every view, the transaction
//! form model with its local validation, and the pure transforms from
//! fetched domain data to render-ready structures. Nothing here talks to
//! the network except through an [`api_client::RiskApiClient`] handed in by
//! the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alerts;
pub mod dashboard;
pub mod form;
pub mod format;
pub mod state;

pub use alerts::{AlertRow, AlertsRender, AlertsView};
pub use dashboard::{DashboardView, DistributionSeries, StatCards};
pub use form::{Field, FieldError, PredictionReport, TransactionCheckView, TransactionForm};
pub use state::{AsyncViewState, FetchEvent, FetchState, Generation};
