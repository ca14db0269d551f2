//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::schedule::ScheduleService;
use crate::storage::CatalogStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across actix workers.
/// The catalog store carries its own swap-on-reload snapshot, so handlers
/// never hold locks across await points.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Catalog store handle
    pub store: Arc<CatalogStore>,
    /// Tariff-schedule service
    pub schedule: Arc<ScheduleService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, store: CatalogStore, schedule: ScheduleService) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            schedule: Arc::new(schedule),
        }
    }
}
