//! Tariff rate update endpoints
//!
//! The update endpoint drives a full reconciliation run against the published
//! schedule; the info endpoint looks up one HS code without touching the
//! catalog.

use crate::server::state::AppState;
use crate::services::schedule::{FailedProduct, UpdatedProduct};
use crate::utils::error::TrackerError;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::{info, warn};

/// Configure tariff update routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/update-tariffs", web::post().to(update_tariff_rates))
        .route("/tariff-info/{hs_code}", web::get().to(get_tariff_info));
}

/// Response for a successful reconciliation run
#[derive(Debug, Serialize)]
struct UpdateTariffsResponse {
    message: String,
    updated_count: usize,
    failed_count: usize,
    total_processed: usize,
    updated_products: Vec<UpdatedProduct>,
    failed_products: Vec<FailedProduct>,
}

/// POST /api/update-tariffs - Refresh current rates from the published schedule
///
/// On success the catalog file has been rewritten and the in-memory snapshot
/// is reloaded before responding, so subsequent product reads observe the
/// merged rates. Per-product misses are reported, not errors.
async fn update_tariff_rates(
    state: web::Data<AppState>,
) -> Result<HttpResponse, TrackerError> {
    info!("Tariff rate update requested");

    let report = state.schedule.update_catalog_tariffs(&state.store).await;

    if !report.success {
        let reason = report.error.unwrap_or_else(|| "Unknown error".to_string());
        warn!("Tariff rate update failed: {}", reason);
        return Err(TrackerError::upstream_fetch(format!(
            "Failed to update tariff rates: {}",
            reason
        )));
    }

    state.store.reload()?;

    Ok(HttpResponse::Ok().json(UpdateTariffsResponse {
        message: "Tariff rates updated successfully".to_string(),
        updated_count: report.updated.len(),
        failed_count: report.failed.len(),
        total_processed: report.total_processed,
        updated_products: report.updated,
        failed_products: report.failed,
    }))
}

/// GET /api/tariff-info/{hs_code} - Current published rate for one HS code
async fn get_tariff_info(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, TrackerError> {
    let hs_code = path.into_inner();
    let info = state.schedule.tariff_info(&hs_code).await?;
    Ok(HttpResponse::Ok().json(info))
}
