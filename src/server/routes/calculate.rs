//! Tariff impact calculation endpoint

use crate::core::types::TariffCalculation;
use crate::services::impact;
use crate::utils::error::TrackerError;
use actix_web::{web, HttpResponse};
use tracing::debug;

/// Configure calculation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/calculate", web::post().to(calculate_tariff));
}

/// POST /api/calculate - Calculate the tariff impact on consumer prices
async fn calculate_tariff(
    payload: web::Json<TariffCalculation>,
) -> Result<HttpResponse, TrackerError> {
    debug!(
        "Calculation requested: price={} markup={} rate={}",
        payload.retail_price, payload.retail_markup, payload.tariff_rate
    );

    let result = impact::compute_impact(&payload)?;
    Ok(HttpResponse::Ok().json(result))
}
