//! Dashboard snapshot module.
//!
//! Builds the immutable render models for the four views (sale overview,
//! single-county breakdown, rent analysis, listing search) and guards each
//! view's published snapshot with last-request-wins refresh semantics.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;
mod refresh_cell;

pub use dashboard_model::*;
pub use dashboard_service::*;
pub use dashboard_traits::*;
pub use refresh_cell::*;
