//! Catalog configuration persisted as a single JSON document
//!
//! The config store owns the catalog. Every mutation goes through it and is
//! written back to disk immediately.

pub mod store;

pub use store::{ConfigStore, DEFAULT_CONFIG_PATH};
