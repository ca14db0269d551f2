//! Tariff-schedule integration
//!
//! Fetches the published Harmonized Tariff Schedule, matches entries to local
//! products by HS-code prefix and merges updated duty rates back into the
//! catalog store.

mod fetch;
mod matching;
mod reconcile;
mod service;
mod types;


pub use matching::{find_rate, parse_rate, CODE_FIELDS, RATE_FIELDS};
pub use service::ScheduleService;
pub use types::{
    FailedProduct, ReconciliationReport, TariffInfo, TariffSchedule, UpdatedProduct,
};
