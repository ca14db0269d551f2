//! Schedule fetching

use super::service::ScheduleService;
use super::types::TariffSchedule;
use tracing::{debug, warn};

impl ScheduleService {
    /// Fetch the current tariff schedule
    ///
    /// Network errors, non-2xx statuses and undecodable bodies all collapse
    /// to `None` after logging; callers decide how to surface the absence.
    pub async fn fetch_schedule(&self) -> Option<TariffSchedule> {
        let response = match self
            .http_client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Network error fetching tariff schedule: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "HTTP {} fetching tariff schedule from {}",
                response.status(),
                self.url
            );
            return None;
        }

        match response.json::<TariffSchedule>().await {
            Ok(schedule) => {
                debug!("Fetched {} schedule entries", schedule.data.len());
                Some(schedule)
            }
            Err(e) => {
                warn!("Failed to decode tariff schedule: {}", e);
                None
            }
        }
    }
}
