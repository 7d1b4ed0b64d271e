//! Listing filter domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use propmarket_market_data::{BedroomBucket, PropertyListing};

/// Sentinel option that disables the county and bedroom predicates.
pub const FILTER_ALL: &str = "All";

/// Bedroom-count predicate.
///
/// A picked bucket matches exactly for one through five bedrooms; the 6+
/// bucket matches every listing with six or more.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BedroomFilter {
    /// No bedroom constraint
    #[default]
    All,
    /// Constrain to one bucket
    Bucket(BedroomBucket),
}

impl BedroomFilter {
    /// Whether a listing with `beds` bedrooms passes this predicate.
    pub fn matches(&self, beds: u8) -> bool {
        match self {
            BedroomFilter::All => true,
            BedroomFilter::Bucket(bucket) => bucket.contains(beds),
        }
    }
}

impl std::str::FromStr for BedroomFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == FILTER_ALL {
            return Ok(BedroomFilter::All);
        }
        BedroomBucket::ALL
            .iter()
            .find(|bucket| bucket.label() == s)
            .map(|&bucket| BedroomFilter::Bucket(bucket))
            .ok_or_else(|| format!("Unknown bedroom filter: {}", s))
    }
}

/// Criteria for narrowing a listing collection.
///
/// Every predicate is optional and the active ones combine with logical
/// AND. The default value filters nothing; predicates absent from a wire
/// payload deserialize to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingFilter {
    /// Case-insensitive substring matched against the raw address, area, or
    /// region. Empty or absent text disables the predicate.
    pub search_text: Option<String>,
    /// Exact county match. Absent or [`FILTER_ALL`] disables the predicate.
    pub county: Option<String>,
    /// Bedroom-count predicate
    pub bedrooms: BedroomFilter,
    /// Inclusive price floor in euro
    pub min_price: Option<Decimal>,
    /// Inclusive price ceiling in euro
    pub max_price: Option<Decimal>,
}

impl ListingFilter {
    /// Whether `listing` passes every active predicate.
    pub fn matches(&self, listing: &PropertyListing) -> bool {
        self.matches_search(listing)
            && self.matches_county(listing)
            && self.bedrooms.matches(listing.beds)
            && self.matches_price(listing.price)
    }

    fn matches_search(&self, listing: &PropertyListing) -> bool {
        let term = match self.search_text.as_deref() {
            Some(text) if !text.is_empty() => text.to_lowercase(),
            _ => return true,
        };
        listing.raw_address.to_lowercase().contains(&term)
            || listing.area.to_lowercase().contains(&term)
            || listing.region.to_lowercase().contains(&term)
    }

    fn matches_county(&self, listing: &PropertyListing) -> bool {
        match self.county.as_deref() {
            Some(county) if county != FILTER_ALL => listing.county == county,
            _ => true,
        }
    }

    fn matches_price(&self, price: Decimal) -> bool {
        if let Some(min) = self.min_price {
            if price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if price > max {
                return false;
            }
        }
        true
    }
}

/// One renderable page of filtered listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    /// The first page of matches, in input order
    pub listings: Vec<PropertyListing>,
    /// How many listings matched the filter in total
    pub shown: usize,
    /// Size of the unfiltered collection
    pub total: usize,
}

impl ListingPage {
    /// True when more listings matched than the page renders.
    pub fn is_truncated(&self) -> bool {
        self.shown > self.listings.len()
    }
}
