//! Core domain types

pub mod types;
