//! Domain types shared across the service
//!
//! Products, calculation inputs/outputs and price history entries. These map
//! one-to-one onto the JSON documents served by the API and persisted in the
//! catalog store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Product with tariff and economic data
///
/// Identified by its Harmonized System code. The first 6 digits of `hs_code`
/// are the internationally consistent classification level used when matching
/// against the external tariff schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub hs_code: String,
    pub name: String,
    pub category: String,
    pub demand_elasticity: f64,
    pub supply_elasticity: f64,
    pub unit: String,
    pub country_of_origin: String,
    /// Current tariff rate as a percentage. Only field mutated by reconciliation.
    pub current_tariff_rate: f64,
    /// Proposed tariff rate as a percentage
    pub proposed_tariff_rate: f64,
}

/// One weekly price observation for a product
///
/// The weekly fields are not schema-controlled by this service; everything
/// beyond the HS code is carried through opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistoryEntry {
    pub hs_code: String,
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

/// Input parameters for tariff impact calculations
#[derive(Debug, Clone, Deserialize)]
pub struct TariffCalculation {
    /// Current consumer price
    pub retail_price: f64,
    /// Retail markup over import cost, in percent. Must be greater than -100.
    pub retail_markup: f64,
    /// Tariff rate in percent
    pub tariff_rate: f64,
    /// Fraction of the tariff cost passed on to consumers, in percent.
    /// Defaults to 75 when omitted.
    pub pass_through_rate: Option<f64>,
    /// Weeks of pre-tariff inventory. Accepted for API compatibility; it does
    /// not enter the price formula.
    #[serde(default)]
    pub inventory_buffer: i64,
}

/// Results of tariff impact analysis, rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub import_cost: f64,
    pub tariff_amount: f64,
    pub tariff_passed: f64,
    pub future_price: f64,
    pub tariff_tax_pct: f64,
    pub price_increase_pct: f64,
}
