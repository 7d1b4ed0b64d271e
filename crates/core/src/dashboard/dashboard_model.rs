//! Dashboard view models.
//!
//! Each snapshot is the complete, immutable render model for one view.
//! A refresh replaces a snapshot wholesale; the presentation layer never
//! patches one in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use propmarket_market_data::PropertyListing;

use crate::aggregation::{self, BedroomMetrics, CountySummary, MarketOverview, RentOverview};
use crate::classification::MarketLabel;
use crate::constants::OVERVIEW_TOP_COUNTIES;
use crate::filtering::{self, ListingFilter, ListingPage};

/// Sale overview: ranked county table plus national rollup cards.
///
/// Summaries arrive display-rounded; the overview card metrics were
/// computed from the full-precision means before their own rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    /// Every county's summary, ranked by price descending
    pub summaries: Vec<CountySummary>,
    /// National rollup cards
    pub overview: MarketOverview,
    /// When this snapshot was computed
    pub generated_at: DateTime<Utc>,
}

impl OverviewSnapshot {
    /// The charted slice: the ten highest-priced counties.
    pub fn top_counties(&self) -> &[CountySummary] {
        aggregation::top_counties(&self.summaries)
    }
}

/// One row of a county's bedroom table, with its market badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedroomBreakdownRow {
    /// Bucket metrics at full precision; this view renders raw values
    pub metrics: BedroomMetrics,
    /// Sale-market badge for the bucket's yoy value
    pub label: MarketLabel,
}

/// Single-county drilldown: one row per bedroom bucket, always six.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountySnapshot {
    /// The county this breakdown describes
    pub county: String,
    /// Bedroom rows in bucket order, 1 through 6+
    pub rows: Vec<BedroomBreakdownRow>,
    /// When this snapshot was computed
    pub generated_at: DateTime<Utc>,
}

/// One county's row on the rent view, with its market badge.
///
/// The badge classifies the display-rounded yoy value, so the label always
/// agrees with the percentage the user reads next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentMarketRow {
    /// Display-rounded county rent summary
    pub summary: CountySummary,
    /// Rent-market badge
    pub label: MarketLabel,
}

/// Rent analysis: ranked market rows, national cards, bedroom chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentSnapshot {
    /// Every rent market's row, ranked by mean rent descending
    pub rows: Vec<RentMarketRow>,
    /// National rollup cards
    pub overview: RentOverview,
    /// Per-bucket rent metrics, display-rounded, always six rows
    pub bedrooms: Vec<BedroomMetrics>,
    /// When this snapshot was computed
    pub generated_at: DateTime<Utc>,
}

impl RentSnapshot {
    /// The charted slice: the ten most expensive rent markets.
    pub fn top_markets(&self) -> &[RentMarketRow] {
        &self.rows[..self.rows.len().min(OVERVIEW_TOP_COUNTIES)]
    }
}

/// Listing search: the raw collection, filtered on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsSnapshot {
    /// All fetched listings in API order (sale date descending)
    pub listings: Vec<PropertyListing>,
    /// When this snapshot was computed
    pub generated_at: DateTime<Utc>,
}

impl ListingsSnapshot {
    /// Filter and paginate this collection without refetching.
    pub fn display_page(&self, filter: &ListingFilter) -> ListingPage {
        filtering::display_page(&self.listings, filter)
    }
}
