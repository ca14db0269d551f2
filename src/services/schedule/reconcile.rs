//! Catalog reconciliation against the published schedule

use super::matching::find_rate;
use super::service::ScheduleService;
use super::types::{FailedProduct, ReconciliationReport, TariffInfo, UpdatedProduct};
use crate::storage::CatalogStore;
use crate::utils::error::{Result, TrackerError};
use tracing::{info, warn};

impl ScheduleService {
    /// Reconcile catalog tariff rates with the published schedule
    ///
    /// Loads the catalog fresh from disk, fetches the schedule, merges matched
    /// rates and rewrites the document. Per-product misses accumulate in the
    /// report and never abort the run; only load, fetch and write failures do,
    /// in which case nothing is persisted and `success` stays false. The
    /// store's in-memory cache is untouched either way; callers reload it
    /// after a successful run.
    pub async fn update_catalog_tariffs(&self, store: &CatalogStore) -> ReconciliationReport {
        let mut report = ReconciliationReport::default();

        let mut document = match store.load() {
            Ok(document) => document,
            Err(e) => {
                warn!("Reconciliation aborted before fetch: {}", e);
                report.error = Some(e.to_string());
                return report;
            }
        };

        let Some(schedule) = self.fetch_schedule().await else {
            report.error = Some("Failed to fetch tariff data".to_string());
            return report;
        };

        for product in &mut document.products {
            report.total_processed += 1;

            if product.hs_code.trim().is_empty() {
                report.failed.push(FailedProduct {
                    name: product.name.clone(),
                    hs_code: None,
                    reason: "Missing HS code".to_string(),
                });
                continue;
            }

            match find_rate(&schedule.data, &product.hs_code) {
                Some(new_rate) => {
                    let old_rate = product.current_tariff_rate;
                    product.current_tariff_rate = new_rate;
                    report.updated.push(UpdatedProduct {
                        name: product.name.clone(),
                        hs_code: product.hs_code.clone(),
                        old_rate,
                        new_rate,
                    });
                }
                None => {
                    report.failed.push(FailedProduct {
                        name: product.name.clone(),
                        hs_code: Some(product.hs_code.clone()),
                        reason: "Tariff rate not found in HTS data".to_string(),
                    });
                }
            }
        }

        // Persist even partially updated catalogs; the failures are in the report
        if let Err(e) = store.write(&document) {
            warn!("Reconciliation write failed: {}", e);
            report.error = Some(e.to_string());
            return report;
        }

        report.success = true;
        info!(
            "Reconciliation complete: {} updated, {} failed of {}",
            report.updated.len(),
            report.failed.len(),
            report.total_processed
        );
        report
    }

    /// Look up the current published rate for a single HS code
    ///
    /// Not tied to the catalog; returns a `None` rate when the code has no
    /// schedule match and an error only when the fetch itself fails.
    pub async fn tariff_info(&self, hs_code: &str) -> Result<TariffInfo> {
        let schedule = self
            .fetch_schedule()
            .await
            .ok_or_else(|| TrackerError::upstream_fetch("Failed to fetch tariff data"))?;

        Ok(TariffInfo {
            hs_code: hs_code.to_string(),
            current_tariff_rate: find_rate(&schedule.data, hs_code),
            data_source: self.data_source.clone(),
            last_updated: self.edition.clone(),
        })
    }
}
