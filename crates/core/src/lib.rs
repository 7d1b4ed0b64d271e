//! Propmarket Core - Domain logic for Irish property-market dashboards.
//!
//! This crate aggregates, classifies, and filters the raw records served by
//! the `market-data` crate. It is transport-agnostic: data arrives through
//! the `PropertyDataProvider` trait and leaves as immutable view snapshots
//! the presentation layer renders.

pub mod aggregation;
pub mod classification;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod filtering;

// Re-export common types from the feature modules
pub use aggregation::*;
pub use classification::*;
pub use dashboard::*;
pub use filtering::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
