//! Fetch facade for the property analytics API.
//!
//! This module contains:
//! - The `PropertyDataProvider` trait the core crate depends on
//! - The request vocabulary (entities, statistic variants, scoped queries)
//! - The `ApiConfig` credentials value
//! - The concrete PMX HTTP implementation
//!
//! # Failure model
//!
//! A fetch either succeeds or surfaces one [`FetchError`](crate::FetchError);
//! there are no retries and no partial results. Malformed records inside a
//! successful response are dropped and logged, never fatal.

mod config;
mod params;
mod traits;

pub mod pmx;

// Re-exports
pub use config::ApiConfig;
pub use params::{Entity, PriceVariant, RentVariant, SpecificQuery};
pub use traits::PropertyDataProvider;
