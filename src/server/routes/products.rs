//! Product catalog endpoints
//!
//! Read-only views over the in-memory catalog snapshot plus the static
//! tariff-scenario reference data.

use crate::server::state::AppState;
use crate::utils::error::TrackerError;
use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::debug;

/// Number of weekly entries served per history request (one year)
const HISTORY_WINDOW: usize = 52;

/// Configure product routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/products", web::get().to(get_products))
        .route("/products/{hs_code}", web::get().to(get_product))
        .route("/price-history/{hs_code}", web::get().to(get_price_history))
        .route("/tariff-scenarios", web::get().to(get_tariff_scenarios));
}

/// GET /api/products - List all products with their elasticity data
async fn get_products(state: web::Data<AppState>) -> HttpResponse {
    let document = state.store.document();
    HttpResponse::Ok().json(&document.products)
}

/// GET /api/products/{hs_code} - Retrieve a specific product
async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, TrackerError> {
    let hs_code = path.into_inner();
    let document = state.store.document();

    let product = document
        .products
        .iter()
        .find(|product| product.hs_code == hs_code)
        .ok_or_else(|| TrackerError::not_found("Product not found"))?;

    Ok(HttpResponse::Ok().json(product))
}

/// GET /api/price-history/{hs_code} - Last year of weekly price data
async fn get_price_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, TrackerError> {
    let hs_code = path.into_inner();
    let document = state.store.document();

    if document.price_history.is_empty() {
        return Err(TrackerError::not_found("Price history not available"));
    }

    let history: Vec<_> = document
        .price_history
        .iter()
        .filter(|entry| entry.hs_code == hs_code)
        .collect();

    if history.is_empty() {
        return Err(TrackerError::not_found("Price history not found"));
    }

    debug!("Serving {} history entries for {}", history.len(), hs_code);
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    Ok(HttpResponse::Ok().json(&history[start..]))
}

/// GET /api/tariff-scenarios - Predefined illustrative rate maps
async fn get_tariff_scenarios() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "current_rates": {
            "Electronics": 2.5,
            "Metals": 3.0,
            "Agriculture": 5.0,
            "Machinery": 2.0,
            "Textiles": 8.0,
            "Chemicals": 3.5,
        },
        "proposed_changes": {
            "Electronics": 25.0,
            "Metals": 10.0,
            "Agriculture": 15.0,
        },
    }))
}
