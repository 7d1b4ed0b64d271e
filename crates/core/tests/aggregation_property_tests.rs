//! Property-based tests for county aggregation and market classification.
//!
//! These tests verify ranking, mean, and classification invariants across
//! randomly generated record sets, using the `proptest` crate.

use std::collections::HashMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

use propmarket_core::aggregation::{county_summaries, top_counties};
use propmarket_core::classification::{classify, MarketKind, MarketLabel};
use propmarket_core::constants::OVERVIEW_TOP_COUNTIES;
use propmarket_market_data::{PriceRecord, TRACKED_COUNTIES};

// =============================================================================
// Generators
// =============================================================================

/// Draws a county from the tracked list, capped so groups overlap while
/// still exceeding the overview's top-ten cut.
fn arb_county() -> impl Strategy<Value = String> {
    proptest::sample::select(&TRACKED_COUNTIES[..12]).prop_map(|county| county.to_string())
}

/// Generates an averaged price record; the price itself may be absent.
fn arb_avg_record() -> impl Strategy<Value = PriceRecord> {
    (
        arb_county(),
        1u8..=6,
        proptest::option::of(50_000i64..900_000),
    )
        .prop_map(|(county, beds, avg)| PriceRecord {
            county,
            beds,
            avg: avg.map(Decimal::from),
            yoy: None,
            avg_yoy: None,
            price: None,
            region: None,
            area: None,
        })
}

/// Generates a grouped county map the way the API delivers it.
fn arb_avg_by_county() -> impl Strategy<Value = HashMap<String, Vec<PriceRecord>>> {
    proptest::collection::vec(arb_avg_record(), 0..60).prop_map(|records| {
        let mut by_county: HashMap<String, Vec<PriceRecord>> = HashMap::new();
        for record in records {
            by_county.entry(record.county.clone()).or_default().push(record);
        }
        by_county
    })
}

/// Generates a percentage between -100.00 and 100.00.
fn arb_percent() -> impl Strategy<Value = Decimal> {
    (-10_000i64..=10_000).prop_map(|n| Decimal::new(n, 2))
}

/// Generates a market kind.
fn arb_kind() -> impl Strategy<Value = MarketKind> {
    prop_oneof![Just(MarketKind::Sale), Just(MarketKind::Rent)]
}

/// Hotter labels rank higher.
fn heat(label: MarketLabel) -> u8 {
    match label {
        MarketLabel::Declining => 0,
        MarketLabel::Stable => 1,
        MarketLabel::Growing => 2,
        MarketLabel::Hot => 3,
        MarketLabel::VeryHot => 4,
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Feature: aggregation, Property 1: Summaries are ranked**
    ///
    /// Output must descend by average price, with exact ties ascending by
    /// county name.
    #[test]
    fn prop_summaries_ranked_descending_with_name_tiebreak(
        avg in arb_avg_by_county()
    ) {
        let summaries = county_summaries(&avg, &HashMap::new());

        for pair in summaries.windows(2) {
            let ordered = pair[0].average_price > pair[1].average_price
                || (pair[0].average_price == pair[1].average_price
                    && pair[0].county < pair[1].county);
            prop_assert!(
                ordered,
                "{} ({}) must sort before {} ({})",
                pair[0].county,
                pair[0].average_price,
                pair[1].county,
                pair[1].average_price
            );
        }
    }

    /// **Feature: aggregation, Property 2: Every county appears once**
    ///
    /// One summary per county in the input map, no more, no fewer, and the
    /// sample size counts all of that county's records.
    #[test]
    fn prop_one_summary_per_county(avg in arb_avg_by_county()) {
        let summaries = county_summaries(&avg, &HashMap::new());

        prop_assert_eq!(summaries.len(), avg.len());
        for summary in &summaries {
            let records = avg.get(&summary.county);
            prop_assert!(records.is_some());
            prop_assert_eq!(summary.sample_size, records.map_or(0, Vec::len));
        }
    }

    /// **Feature: aggregation, Property 3: The average is the mean**
    ///
    /// A county's average price must equal the arithmetic mean of its
    /// defined prices, and be zero when no record carries a price.
    #[test]
    fn prop_average_price_is_mean_of_defined_values(
        avg in arb_avg_by_county()
    ) {
        let summaries = county_summaries(&avg, &HashMap::new());

        for summary in &summaries {
            let prices: Vec<Decimal> = avg[&summary.county]
                .iter()
                .filter_map(|r| r.avg)
                .collect();
            let expected = if prices.is_empty() {
                Decimal::ZERO
            } else {
                prices.iter().sum::<Decimal>() / Decimal::from(prices.len())
            };
            prop_assert_eq!(summary.average_price, expected);
        }
    }

    /// **Feature: aggregation, Property 4: The chart slice is capped**
    ///
    /// The overview slice is a prefix of the ranked list and never longer
    /// than ten entries.
    #[test]
    fn prop_top_counties_is_capped_prefix(avg in arb_avg_by_county()) {
        let summaries = county_summaries(&avg, &HashMap::new());
        let top = top_counties(&summaries);

        prop_assert!(top.len() <= OVERVIEW_TOP_COUNTIES);
        prop_assert_eq!(top.len(), summaries.len().min(OVERVIEW_TOP_COUNTIES));
        prop_assert_eq!(top, &summaries[..top.len()]);
    }

    /// **Feature: classification, Property 5: Classification is total**
    ///
    /// Every finite percentage maps to exactly one label, drawn from the
    /// ladder of its market: sales never read VeryHot, rents never read
    /// Declining.
    #[test]
    fn prop_classify_is_total_within_ladder(
        yoy in arb_percent(),
        kind in arb_kind()
    ) {
        let label = classify(yoy, kind);

        match kind {
            MarketKind::Sale => prop_assert!(label != MarketLabel::VeryHot),
            MarketKind::Rent => prop_assert!(label != MarketLabel::Declining),
        }
    }

    /// **Feature: classification, Property 6: Hotter trend, hotter label**
    ///
    /// Within one market, a larger yoy change never produces a cooler
    /// label.
    #[test]
    fn prop_classify_is_monotonic(
        a in arb_percent(),
        b in arb_percent(),
        kind in arb_kind()
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(heat(classify(lo, kind)) <= heat(classify(hi, kind)));
    }
}
