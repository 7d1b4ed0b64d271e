//! Aggregation domain models.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use propmarket_market_data::BedroomBucket;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Round a euro amount for display: whole euro, half away from zero.
pub fn round_display_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a percentage for display: two decimals, half away from zero.
pub fn round_display_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Ranked per-county aggregate.
///
/// The rent view reuses this shape with `average_price` carrying the mean
/// monthly rent and `average_yoy` the mean rent trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountySummary {
    /// County name, matching the API's canonical spelling
    pub county: String,
    /// Mean price (or rent) over the county's contributing records
    pub average_price: Decimal,
    /// Mean year-over-year change in percent
    pub average_yoy: Decimal,
    /// Number of raw records behind this county's entry
    pub sample_size: usize,
}

impl CountySummary {
    /// Round for display: whole euro for the price, two decimals for the
    /// percentage. Applied once at the snapshot boundary, never cumulatively.
    pub fn rounded_for_display(mut self) -> Self {
        self.average_price = round_display_price(self.average_price);
        self.average_yoy = round_display_percent(self.average_yoy);
        self
    }
}

/// One bedroom bucket's metrics in a breakdown view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedroomMetrics {
    /// The bedroom bucket this row describes
    pub bucket: BedroomBucket,
    /// Mean sale price, or mean monthly rent on the rent view
    pub average_price: Decimal,
    /// Year-over-year change in percent
    pub yoy_percent: Decimal,
}

impl BedroomMetrics {
    /// Zero-valued metrics for a bucket with no data. The views still render
    /// the row rather than dropping the bucket.
    pub fn empty(bucket: BedroomBucket) -> Self {
        Self {
            bucket,
            average_price: Decimal::ZERO,
            yoy_percent: Decimal::ZERO,
        }
    }

    /// Round for display, same contract as [`CountySummary::rounded_for_display`].
    pub fn rounded_for_display(mut self) -> Self {
        self.average_price = round_display_price(self.average_price);
        self.yoy_percent = round_display_percent(self.yoy_percent);
        self
    }
}

/// National rollup cards on the sale overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    /// Record count across every county, not just the charted ones
    pub total_properties: usize,
    /// Mean of the charted counties' average prices
    pub national_average_price: Decimal,
    /// Mean of the charted counties' yoy changes in percent
    pub national_average_yoy: Decimal,
    /// Number of counties with any data
    pub counties_tracked: usize,
}

impl MarketOverview {
    pub fn rounded_for_display(mut self) -> Self {
        self.national_average_price = round_display_price(self.national_average_price);
        self.national_average_yoy = round_display_percent(self.national_average_yoy);
        self
    }
}

/// National rollup cards on the rent view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentOverview {
    /// Mean monthly rent over every joined observation
    pub national_average_rent: Decimal,
    /// Mean yoy change over every joined observation, in percent
    pub national_average_yoy: Decimal,
    /// Number of counties with rent data
    pub markets_tracked: usize,
}

impl RentOverview {
    pub fn rounded_for_display(mut self) -> Self {
        self.national_average_rent = round_display_price(self.national_average_rent);
        self.national_average_yoy = round_display_percent(self.national_average_yoy);
        self
    }
}

/// One joined rent observation: an averaged rent record matched with its
/// year-over-year counterpart by exact (county, bedroom count) identity.
/// Missing values enter as zero so downstream means never see gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct RentObservation {
    pub county: String,
    pub beds: u8,
    /// Mean monthly rent, zero when the source record had none
    pub rent: Decimal,
    /// Year-over-year rent change in percent, zero when unmatched
    pub yoy: Decimal,
}
