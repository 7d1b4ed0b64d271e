//! Market classification module.
//!
//! Maps a year-over-year percentage change to the qualitative badge the
//! dashboard shows, with separate threshold ladders for sale and rent
//! markets.

mod market_classifier;

pub use market_classifier::*;
