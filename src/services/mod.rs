//! Business services
//!
//! - `impact`: tariff pass-through calculation
//! - `schedule`: external tariff-schedule fetch and rate reconciliation

pub mod impact;
pub mod schedule;
