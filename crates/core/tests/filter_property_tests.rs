//! Property-based tests for the listing filter.
//!
//! These tests verify that universal filter properties hold across randomly
//! generated listing collections and criteria, using the `proptest` crate.

use proptest::prelude::*;
use rust_decimal::Decimal;

use propmarket_core::constants::LISTING_PAGE_SIZE;
use propmarket_core::filtering::{
    display_page, filter_listings, BedroomFilter, ListingFilter,
};
use propmarket_market_data::{BedroomBucket, PropertyListing, TRACKED_COUNTIES};

// =============================================================================
// Generators
// =============================================================================

/// Draws a county from the head of the tracked list, a pool small enough
/// that filters actually hit.
fn arb_county() -> impl Strategy<Value = String> {
    proptest::sample::select(&TRACKED_COUNTIES[..5]).prop_map(|county| county.to_string())
}

/// Generates a random property listing.
fn arb_listing() -> impl Strategy<Value = PropertyListing> {
    (
        arb_county(),
        "[a-z]{3,12}",      // region
        "[a-z]{3,12}",      // area
        0u8..=9,            // beds
        50_000i64..900_000, // price in euro
        "[a-z0-9 ]{5,30}",  // raw address
    )
        .prop_map(|(county, region, area, beds, price, raw_address)| PropertyListing {
            county,
            region,
            area,
            beds,
            price: Decimal::from(price),
            raw_address,
            location: None,
            sale_date: "2024-06-01".to_string(),
            sqr_metres: None,
        })
}

/// Generates a listing collection of up to `max` entries.
fn arb_listings(max: usize) -> impl Strategy<Value = Vec<PropertyListing>> {
    proptest::collection::vec(arb_listing(), 0..=max)
}

/// Generates a random bedroom bucket.
fn arb_bucket() -> impl Strategy<Value = BedroomBucket> {
    prop_oneof![
        Just(BedroomBucket::One),
        Just(BedroomBucket::Two),
        Just(BedroomBucket::Three),
        Just(BedroomBucket::Four),
        Just(BedroomBucket::Five),
        Just(BedroomBucket::SixPlus),
    ]
}

/// Generates random filter criteria with every predicate optional.
fn arb_filter() -> impl Strategy<Value = ListingFilter> {
    (
        proptest::option::of("[a-z]{1,6}"),
        proptest::option::of(arb_county()),
        prop_oneof![
            Just(BedroomFilter::All),
            arb_bucket().prop_map(BedroomFilter::Bucket),
        ],
        proptest::option::of(100_000i64..500_000),
        proptest::option::of(400_000i64..900_000),
    )
        .prop_map(|(search_text, county, bedrooms, min, max)| ListingFilter {
            search_text,
            county,
            bedrooms,
            min_price: min.map(Decimal::from),
            max_price: max.map(Decimal::from),
        })
}

/// Whether `needle` appears within `haystack` in order.
fn is_subsequence(needle: &[PropertyListing], haystack: &[PropertyListing]) -> bool {
    let mut remaining = haystack.iter();
    needle
        .iter()
        .all(|wanted| remaining.any(|candidate| candidate == wanted))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Feature: listing-filter, Property 1: Filtering is idempotent**
    ///
    /// Applying the same criteria to an already-filtered collection must
    /// change nothing.
    #[test]
    fn prop_filtering_is_idempotent(
        listings in arb_listings(40),
        filter in arb_filter()
    ) {
        let once = filter_listings(&listings, &filter);
        let twice = filter_listings(&once, &filter);

        prop_assert_eq!(once, twice);
    }

    /// **Feature: listing-filter, Property 2: Predicate order is commutative**
    ///
    /// Narrowing by county then price must yield the same set as price then
    /// county, and both must equal the combined AND filter.
    #[test]
    fn prop_predicate_order_is_commutative(
        listings in arb_listings(40),
        county in proptest::option::of(arb_county()),
        min in proptest::option::of(100_000i64..500_000)
    ) {
        let county_only = ListingFilter {
            county: county.clone(),
            ..Default::default()
        };
        let price_only = ListingFilter {
            min_price: min.map(Decimal::from),
            ..Default::default()
        };
        let combined = ListingFilter {
            county,
            min_price: min.map(Decimal::from),
            ..Default::default()
        };

        let county_then_price =
            filter_listings(&filter_listings(&listings, &county_only), &price_only);
        let price_then_county =
            filter_listings(&filter_listings(&listings, &price_only), &county_only);
        let at_once = filter_listings(&listings, &combined);

        prop_assert_eq!(&county_then_price, &price_then_county);
        prop_assert_eq!(&county_then_price, &at_once);
    }

    /// **Feature: listing-filter, Property 3: Results are an ordered subset**
    ///
    /// Every result must satisfy the criteria and appear in input order;
    /// every input listing satisfying the criteria must appear.
    #[test]
    fn prop_results_are_ordered_matching_subset(
        listings in arb_listings(40),
        filter in arb_filter()
    ) {
        let filtered = filter_listings(&listings, &filter);

        prop_assert!(filtered.iter().all(|listing| filter.matches(listing)));
        prop_assert!(is_subsequence(&filtered, &listings));
        prop_assert_eq!(
            filtered.len(),
            listings.iter().filter(|l| filter.matches(l)).count()
        );
    }

    /// **Feature: listing-filter, Property 4: 6+ means six or more**
    ///
    /// The 6+ bucket must select exactly the listings with six or more
    /// bedrooms, while a numbered bucket selects exact matches only.
    #[test]
    fn prop_six_plus_matches_six_and_above(listings in arb_listings(40)) {
        let six_plus = ListingFilter {
            bedrooms: BedroomFilter::Bucket(BedroomBucket::SixPlus),
            ..Default::default()
        };
        let expected: Vec<PropertyListing> =
            listings.iter().filter(|l| l.beds >= 6).cloned().collect();

        prop_assert_eq!(filter_listings(&listings, &six_plus), expected);

        let exactly_three = ListingFilter {
            bedrooms: BedroomFilter::Bucket(BedroomBucket::Three),
            ..Default::default()
        };

        prop_assert!(filter_listings(&listings, &exactly_three)
            .iter()
            .all(|l| l.beds == 3));
    }

    /// **Feature: listing-filter, Property 5: Inactive criteria pass everything**
    ///
    /// The default filter must return the input unchanged.
    #[test]
    fn prop_default_filter_is_identity(listings in arb_listings(40)) {
        let filtered = filter_listings(&listings, &ListingFilter::default());

        prop_assert_eq!(filtered, listings);
    }

    /// **Feature: listing-filter, Property 6: Page counts tell the truth**
    ///
    /// The display page must report the full match count and collection
    /// size, render at most one page, and flag truncation exactly when
    /// matches exceed the page.
    #[test]
    fn prop_display_page_counts_are_consistent(
        listings in arb_listings(150),
        filter in arb_filter()
    ) {
        let matches = filter_listings(&listings, &filter);
        let page = display_page(&listings, &filter);

        prop_assert_eq!(page.shown, matches.len());
        prop_assert_eq!(page.total, listings.len());
        prop_assert_eq!(
            page.listings.len(),
            matches.len().min(LISTING_PAGE_SIZE)
        );
        prop_assert_eq!(page.is_truncated(), matches.len() > LISTING_PAGE_SIZE);
        prop_assert!(is_subsequence(&page.listings, &matches));
    }
}
