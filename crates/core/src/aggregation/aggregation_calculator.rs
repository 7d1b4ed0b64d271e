//! Pure aggregation functions over raw market records.
//!
//! Every function here is deterministic and side-effect free. Sale and rent
//! views share the same grouping and ranking logic instead of re-deriving it
//! per view. Means over zero contributing records are never computed; they
//! degrade to zero so the presentation layer always has something to render.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use propmarket_market_data::{BedroomBucket, PriceRecord, RentRecord};

use crate::constants::OVERVIEW_TOP_COUNTIES;

use super::{BedroomMetrics, CountySummary, MarketOverview, RentObservation, RentOverview};

/// Arithmetic mean of a summed series, zero when nothing contributed.
fn mean(sum: Decimal, count: usize) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        sum / Decimal::from(count)
    }
}

/// Per-county mean prices and trends, ranked by price descending with ties
/// broken ascending by county name.
///
/// Records without a price do not dilute the price mean and records without
/// a yoy value do not dilute the trend mean; a county with no usable values
/// still gets a row, with zeros. Counties absent from the yoy map read as
/// flat. `sample_size` counts every record for the county, priced or not.
pub fn county_summaries(
    avg_by_county: &HashMap<String, Vec<PriceRecord>>,
    yoy_by_county: &HashMap<String, Vec<PriceRecord>>,
) -> Vec<CountySummary> {
    let mut summaries: Vec<CountySummary> = avg_by_county
        .iter()
        .map(|(county, records)| {
            let prices: Vec<Decimal> = records.iter().filter_map(|r| r.avg).collect();
            let average_price = mean(prices.iter().sum(), prices.len());

            let trends: Vec<Decimal> = yoy_by_county
                .get(county)
                .map(|records| records.iter().filter_map(|r| r.yoy).collect())
                .unwrap_or_default();
            let average_yoy = mean(trends.iter().sum(), trends.len());

            CountySummary {
                county: county.clone(),
                average_price,
                average_yoy,
                sample_size: records.len(),
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.average_price
            .cmp(&a.average_price)
            .then_with(|| a.county.cmp(&b.county))
    });
    summaries
}

/// The slice the overview charts: the ten highest-priced counties, or fewer
/// when fewer exist. Tables keep the unabridged list.
pub fn top_counties(summaries: &[CountySummary]) -> &[CountySummary] {
    &summaries[..summaries.len().min(OVERVIEW_TOP_COUNTIES)]
}

/// National rollup for the sale overview cards.
///
/// Totals and the tracked-county count cover every county in the average
/// map; the national means cover only the charted (top) summaries, computed
/// from their full-precision means.
pub fn market_overview(
    avg_by_county: &HashMap<String, Vec<PriceRecord>>,
    top: &[CountySummary],
) -> MarketOverview {
    let total_properties = avg_by_county.values().map(Vec::len).sum();

    MarketOverview {
        total_properties,
        national_average_price: mean(top.iter().map(|s| s.average_price).sum(), top.len()),
        national_average_yoy: mean(top.iter().map(|s| s.average_yoy).sum(), top.len()),
        counties_tracked: avg_by_county.len(),
    }
}

/// Per-bucket price and trend for one county, always all six buckets in
/// ascending order.
///
/// Each bucket takes the first record whose bedroom count matches exactly.
/// The upstream API pre-buckets six-plus properties under bedroom count 6,
/// so the 6+ bucket matches 6 and nothing above it here. Buckets with no
/// record render as zeros rather than disappearing.
pub fn bedroom_breakdown(
    county_avg: &[PriceRecord],
    county_yoy: &[PriceRecord],
) -> Vec<BedroomMetrics> {
    BedroomBucket::ALL
        .iter()
        .map(|&bucket| {
            let beds = bucket.beds();
            let average_price = county_avg
                .iter()
                .find(|r| r.beds == beds)
                .and_then(|r| r.avg)
                .unwrap_or(Decimal::ZERO);
            let yoy_percent = county_yoy
                .iter()
                .find(|r| r.beds == beds)
                .and_then(|r| r.yoy)
                .unwrap_or(Decimal::ZERO);

            BedroomMetrics {
                bucket,
                average_price,
                yoy_percent,
            }
        })
        .collect()
}

/// Join averaged rent records with their year-over-year counterparts by
/// exact (county, bedroom count) equality.
///
/// Every average record yields an observation: unmatched ones read as flat
/// (zero yoy) and missing values read as zero. Yoy records without an
/// average counterpart are dropped, matching the rent view's contract of
/// one row per priced market.
pub fn join_rent_records(avg: &[RentRecord], yoy: &[RentRecord]) -> Vec<RentObservation> {
    let yoy_by_key: HashMap<(&str, u8), Decimal> = yoy
        .iter()
        .map(|r| {
            (
                (r.county.as_str(), r.beds),
                r.avg_yoy.unwrap_or(Decimal::ZERO),
            )
        })
        .collect();

    avg.iter()
        .map(|record| RentObservation {
            county: record.county.clone(),
            beds: record.beds,
            rent: record.avg.unwrap_or(Decimal::ZERO),
            yoy: yoy_by_key
                .get(&(record.county.as_str(), record.beds))
                .copied()
                .unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Group joined rent observations into per-county summaries, ranked by mean
/// rent descending with ties broken ascending by county name.
///
/// The zeros introduced by the join stay in the means; the rent view
/// zero-fills rather than skipping, so every bedroom bucket weighs in.
pub fn rent_summaries(observations: &[RentObservation]) -> Vec<CountySummary> {
    let mut by_county: HashMap<&str, Vec<&RentObservation>> = HashMap::new();
    for obs in observations {
        by_county.entry(obs.county.as_str()).or_default().push(obs);
    }

    let mut summaries: Vec<CountySummary> = by_county
        .into_iter()
        .map(|(county, group)| CountySummary {
            county: county.to_string(),
            average_price: mean(group.iter().map(|o| o.rent).sum(), group.len()),
            average_yoy: mean(group.iter().map(|o| o.yoy).sum(), group.len()),
            sample_size: group.len(),
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.average_price
            .cmp(&a.average_price)
            .then_with(|| a.county.cmp(&b.county))
    });
    summaries
}

/// National rollup for the rent cards, over every joined observation.
pub fn rent_overview(observations: &[RentObservation]) -> RentOverview {
    let distinct_counties: HashSet<&str> =
        observations.iter().map(|o| o.county.as_str()).collect();

    RentOverview {
        national_average_rent: mean(
            observations.iter().map(|o| o.rent).sum(),
            observations.len(),
        ),
        national_average_yoy: mean(
            observations.iter().map(|o| o.yoy).sum(),
            observations.len(),
        ),
        markets_tracked: distinct_counties.len(),
    }
}

/// Per-bucket rent metrics across all counties, always all six buckets.
/// Buckets with no observations render as zeros.
pub fn rent_bedroom_breakdown(observations: &[RentObservation]) -> Vec<BedroomMetrics> {
    BedroomBucket::ALL
        .iter()
        .map(|&bucket| {
            let beds = bucket.beds();
            let group: Vec<&RentObservation> =
                observations.iter().filter(|o| o.beds == beds).collect();
            if group.is_empty() {
                return BedroomMetrics::empty(bucket);
            }

            BedroomMetrics {
                bucket,
                average_price: mean(group.iter().map(|o| o.rent).sum(), group.len()),
                yoy_percent: mean(group.iter().map(|o| o.yoy).sum(), group.len()),
            }
        })
        .collect()
}
