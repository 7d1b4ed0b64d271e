//! Propmarket Market Data Crate
//!
//! This crate fetches Irish residential property-market statistics from the
//! PMX analytics API and decodes them into typed records for the core crate.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Grouped price statistics keyed by county, region, or area
//! - Averaged and year-over-year variants for sale prices and rents
//! - Individual sale listings for an area
//! - Tolerant decoding of the API's list and object response shapes
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |    ApiConfig     | --> |   PmxProvider    |  (reqwest client)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   PmxPayload     |  (shape-tolerant decoding)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     Records      |  (PriceRecord, RentRecord,
//!                          +------------------+   PropertyListing)
//! ```
//!
//! # Core Types
//!
//! - [`PropertyDataProvider`] - The async fetch facade the core depends on
//! - [`PriceRecord`] - One (county, bedroom-count) sale-price observation
//! - [`RentRecord`] - One (county, bedroom-count) rent observation
//! - [`PropertyListing`] - One realized sale with address and date
//! - [`BedroomBucket`] - The six display buckets (1..5 and 6+)
//! - [`FetchError`] - Failure taxonomy for all fetch operations

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{BedroomBucket, PriceRecord, PropertyListing, RentRecord, TRACKED_COUNTIES};

// Re-export provider types
pub use provider::pmx::PmxProvider;
pub use provider::{ApiConfig, Entity, PriceVariant, PropertyDataProvider, RentVariant, SpecificQuery};

// Re-export errors
pub use errors::FetchError;
