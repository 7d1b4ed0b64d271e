//! Aggregation of raw market records into ranked county and bedroom views.
//!
//! The calculator functions are pure and synchronous: records in, summaries
//! out, full `Decimal` precision throughout. Display rounding happens once,
//! when the dashboard layer builds a snapshot, never inside the means.

mod aggregation_calculator;
mod aggregation_model;

pub use aggregation_calculator::*;
pub use aggregation_model::*;
