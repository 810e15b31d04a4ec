//! Observability infrastructure for the SHOP.CO storefront.
//!
//! This crate provides:
//! - `SessionLogger` - Structured logging tagged with the shopping session
//! - `LogBuilder` - Fluent construction of entries with structured fields
//! - `MemorySink` - In-memory capture for tests and debugging

mod logging;

pub use logging::*;
