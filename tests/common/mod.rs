//! Shared test infrastructure
//!
//! Catalog fixtures, temp-file stores and wiremock-backed schedule services.

use serde_json::json;
use std::path::PathBuf;
use tariff_tracker::config::ScheduleConfig;
use tariff_tracker::{CatalogStore, ScheduleService};
use tempfile::TempDir;

/// Catalog of three products: two with USITC-matchable codes, one without
pub fn sample_catalog() -> serde_json::Value {
    json!({
        "products": [
            {
                "hs_code": "854430",
                "name": "Wiring Sets",
                "category": "Electronics",
                "demand_elasticity": -2.2,
                "supply_elasticity": 1.9,
                "unit": "kg",
                "country_of_origin": "China",
                "current_tariff_rate": 2.5,
                "proposed_tariff_rate": 25.0
            },
            {
                "hs_code": "851712",
                "name": "Smartphones",
                "category": "Electronics",
                "demand_elasticity": -1.8,
                "supply_elasticity": 2.1,
                "unit": "unit",
                "country_of_origin": "China",
                "current_tariff_rate": 0.0,
                "proposed_tariff_rate": 25.0
            },
            {
                "hs_code": "999999",
                "name": "Unlisted Widget",
                "category": "Machinery",
                "demand_elasticity": -1.0,
                "supply_elasticity": 1.0,
                "unit": "unit",
                "country_of_origin": "Germany",
                "current_tariff_rate": 1.0,
                "proposed_tariff_rate": 2.0
            }
        ],
        "price_history": [
            { "hs_code": "851712", "week": "2024-06-03", "avg_price": 799.0 },
            { "hs_code": "851712", "week": "2024-06-10", "avg_price": 801.5 }
        ]
    })
}

/// Schedule payload matching the first two sample products
pub fn sample_schedule() -> serde_json::Value {
    json!({
        "data": [
            { "hts_number": "8544300000", "duty_rate": "5%" },
            { "hts_number": "8517120050", "duty_rate": "FREE" },
            { "hts_number": "6109100012", "duty_rate": "16.5%" }
        ]
    })
}

/// Write a catalog document into a temp dir and open a store over it
pub fn open_store(dir: &TempDir, catalog: &serde_json::Value) -> (PathBuf, CatalogStore) {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_string_pretty(catalog).unwrap()).unwrap();
    let store = CatalogStore::open(&path).unwrap();
    (path, store)
}

/// Schedule service pointed at a test endpoint
pub fn schedule_service(url: &str) -> ScheduleService {
    ScheduleService::new(&ScheduleConfig {
        url: url.to_string(),
        timeout_secs: 5,
        data_source: "USITC HTS 2024".to_string(),
        edition: "2024".to_string(),
    })
}
