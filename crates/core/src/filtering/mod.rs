//! Listing filter module.
//!
//! Narrows a property-listing collection with optional, AND-combined
//! predicates (free text, county, bedrooms, price range) and truncates the
//! result for display. Pure functions, no incremental state: every criteria
//! change re-evaluates the full input.

mod filter_model;
mod filter_service;

pub use filter_model::*;
pub use filter_service::*;
