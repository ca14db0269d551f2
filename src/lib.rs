//! # Tariff Tracker
//!
//! API service for analyzing the impact of trade tariffs on consumer prices.
//!
//! ## Features
//!
//! - Product catalog with elasticity data, keyed by Harmonized System code
//! - Tariff impact calculations with pass-through economic modeling
//! - Live tariff rate reconciliation against the published USITC Harmonized
//!   Tariff Schedule
//! - Weekly price history and illustrative tariff scenarios
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tariff_tracker::{server, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/tracker.yaml").await?;
//!     let server = server::HttpServer::new(&config)?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::types::{CalculationResult, PriceHistoryEntry, Product, TariffCalculation};
pub use services::schedule::{ReconciliationReport, ScheduleService, TariffInfo};
pub use storage::{CatalogDocument, CatalogStore};
pub use utils::error::{Result, TrackerError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
