//! Persistence layer
//!
//! The catalog lives in a single JSON document on disk; this module owns all
//! reads and writes of that document.

mod catalog;

pub use catalog::{CatalogDocument, CatalogStore};
