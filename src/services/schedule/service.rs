//! Schedule service construction

use crate::config::ScheduleConfig;
use std::time::Duration;
use tracing::info;

/// Service for fetching the external tariff schedule and reconciling rates
#[derive(Debug, Clone)]
pub struct ScheduleService {
    /// HTTP client for schedule fetches
    pub(super) http_client: reqwest::Client,
    /// Publication URL
    pub(super) url: String,
    /// Per-fetch timeout
    pub(super) timeout: Duration,
    /// Publication label reported in tariff-info responses
    pub(super) data_source: String,
    /// Publication edition reported as `last_updated`
    pub(super) edition: String,
}

impl ScheduleService {
    /// Create a new schedule service from configuration
    pub fn new(config: &ScheduleConfig) -> Self {
        let service = Self {
            http_client: reqwest::Client::new(),
            url: config.url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            data_source: config.data_source.clone(),
            edition: config.edition.clone(),
        };

        info!("Schedule service initialized for {}", service.data_source);
        service
    }
}
