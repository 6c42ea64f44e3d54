//! API client for the FraudShield scoring service
//!
//! Typed HTTP access to the dashboard-stats, alerts, and transaction-check
//! endpoints. All scoring lives on the server; this crate only moves typed
//! values across the wire and classifies failures.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::RiskApiClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::*;
