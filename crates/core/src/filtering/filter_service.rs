//! Pure listing-filter functions.

use propmarket_market_data::PropertyListing;

use crate::constants::LISTING_PAGE_SIZE;

use super::{ListingFilter, ListingPage};

/// Apply `filter` over the full collection, preserving input order.
///
/// The input arrives sale-date descending from the API and is not re-sorted
/// here. Filtering is idempotent and predicate order never changes the
/// result set.
pub fn filter_listings(listings: &[PropertyListing], filter: &ListingFilter) -> Vec<PropertyListing> {
    listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect()
}

/// Filter and truncate for rendering.
///
/// The page carries the first hundred matches plus the true match and
/// collection counts, so the caller can render "X of Y" and a truncation
/// notice without re-filtering.
pub fn display_page(listings: &[PropertyListing], filter: &ListingFilter) -> ListingPage {
    let matches: Vec<&PropertyListing> = listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .collect();

    ListingPage {
        shown: matches.len(),
        total: listings.len(),
        listings: matches
            .into_iter()
            .take(LISTING_PAGE_SIZE)
            .cloned()
            .collect(),
    }
}
