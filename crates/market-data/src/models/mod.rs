//! Property-market data models
//!
//! This module contains the record types returned by the analytics API:
//! - `bedrooms` - The six bedroom display buckets (BedroomBucket)
//! - `counties` - The canonical list of tracked counties
//! - `price` - Aggregate sale-price observations (PriceRecord)
//! - `rent` - Aggregate rent observations (RentRecord)
//! - `listing` - Individual sale listings (PropertyListing)

mod bedrooms;
mod counties;
mod listing;
mod price;
mod rent;

pub use bedrooms::BedroomBucket;
pub use counties::TRACKED_COUNTIES;
pub use listing::PropertyListing;
pub use price::PriceRecord;
pub use rent::RentRecord;
