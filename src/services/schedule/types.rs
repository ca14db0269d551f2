//! Types for schedule fetching and reconciliation

use serde::{Deserialize, Serialize};

/// Published tariff-schedule payload
///
/// Only the `data` array is contractual; the entries inside it are not
/// schema-controlled by this service and stay untyped until matched.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffSchedule {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// Audit report of one reconciliation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconciliationReport {
    pub updated: Vec<UpdatedProduct>,
    pub failed: Vec<FailedProduct>,
    pub total_processed: usize,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A product whose current rate was overwritten
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedProduct {
    pub name: String,
    pub hs_code: String,
    pub old_rate: f64,
    pub new_rate: f64,
}

/// A product that could not be updated, with the reason
#[derive(Debug, Clone, Serialize)]
pub struct FailedProduct {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_code: Option<String>,
    pub reason: String,
}

/// Current tariff information for a single HS code
#[derive(Debug, Clone, Serialize)]
pub struct TariffInfo {
    pub hs_code: String,
    pub current_tariff_rate: Option<f64>,
    pub data_source: String,
    pub last_updated: String,
}
