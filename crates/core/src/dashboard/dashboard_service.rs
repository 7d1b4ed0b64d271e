//! Dashboard service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};

use propmarket_market_data::{
    FetchError, PriceVariant, PropertyDataProvider, RentVariant, SpecificQuery,
};

use super::dashboard_model::{
    BedroomBreakdownRow, CountySnapshot, ListingsSnapshot, OverviewSnapshot, RentMarketRow,
    RentSnapshot,
};
use super::dashboard_traits::DashboardServiceTrait;
use super::refresh_cell::RefreshCell;
use crate::aggregation::{
    bedroom_breakdown, county_summaries, join_rent_records, market_overview,
    rent_bedroom_breakdown, rent_overview, rent_summaries, top_counties, BedroomMetrics,
    CountySummary,
};
use crate::classification::{classify, MarketKind};
use crate::errors::Result;
use crate::filtering::{ListingFilter, ListingPage};

/// Service that refreshes and serves dashboard snapshots.
///
/// Each view keeps its own generation-guarded cell, so refreshes of
/// different views never contend and a stale response for one view can
/// never overwrite a newer one. A failed refresh leaves the previously
/// published snapshot untouched.
pub struct DashboardService {
    provider: Arc<dyn PropertyDataProvider>,
    overview: RefreshCell<OverviewSnapshot>,
    county: RefreshCell<CountySnapshot>,
    rent: RefreshCell<RentSnapshot>,
    listings: RefreshCell<ListingsSnapshot>,
}

impl DashboardService {
    /// Creates a new DashboardService instance.
    pub fn new(provider: Arc<dyn PropertyDataProvider>) -> Self {
        Self {
            provider,
            overview: RefreshCell::new(),
            county: RefreshCell::new(),
            rent: RefreshCell::new(),
            listings: RefreshCell::new(),
        }
    }

    /// Unpack a pair of jointly awaited fetches, logging the first failure.
    fn both<A, B>(
        view: &str,
        a: std::result::Result<A, FetchError>,
        b: std::result::Result<B, FetchError>,
    ) -> Result<(A, B)> {
        match (a, b) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(err), _) | (_, Err(err)) => {
                error!("{} refresh failed: {}", view, err);
                Err(err.into())
            }
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn refresh_overview(&self) -> Result<Option<Arc<OverviewSnapshot>>> {
        let token = self.overview.begin();
        debug!("Refreshing sale overview (request {})", token);

        let (avg, yoy) = tokio::join!(
            self.provider.fetch_county_averages(),
            self.provider.fetch_county_yoy()
        );
        let (avg, yoy) = Self::both("Sale overview", avg, yoy)?;

        let summaries = county_summaries(&avg, &yoy);
        // The national cards average the charted counties' full-precision
        // means; rounding happens once, on the way into the snapshot.
        let overview = market_overview(&avg, top_counties(&summaries)).rounded_for_display();
        let summaries: Vec<CountySummary> = summaries
            .into_iter()
            .map(CountySummary::rounded_for_display)
            .collect();

        let snapshot = OverviewSnapshot {
            summaries,
            overview,
            generated_at: Utc::now(),
        };
        Ok(self.overview.commit(token, snapshot))
    }

    async fn refresh_county(&self, county: &str) -> Result<Option<Arc<CountySnapshot>>> {
        let token = self.county.begin();
        debug!("Refreshing bedroom breakdown for {} (request {})", county, token);

        let query = SpecificQuery::new(county);
        let (avg, yoy) = tokio::join!(
            self.provider.fetch_specific(&query, PriceVariant::Average),
            self.provider.fetch_specific(&query, PriceVariant::Yoy)
        );
        let (avg, yoy) = Self::both("County breakdown", avg, yoy)?;

        // This view renders raw bucket values, so the badge classifies the
        // unrounded trend.
        let rows = bedroom_breakdown(&avg, &yoy)
            .into_iter()
            .map(|metrics| BedroomBreakdownRow {
                label: classify(metrics.yoy_percent, MarketKind::Sale),
                metrics,
            })
            .collect();

        let snapshot = CountySnapshot {
            county: county.to_string(),
            rows,
            generated_at: Utc::now(),
        };
        Ok(self.county.commit(token, snapshot))
    }

    async fn refresh_rent(&self) -> Result<Option<Arc<RentSnapshot>>> {
        let token = self.rent.begin();
        debug!("Refreshing rent analysis (request {})", token);

        let (avg, yoy) = tokio::join!(
            self.provider.fetch_rent(RentVariant::Average),
            self.provider.fetch_rent(RentVariant::Yoy)
        );
        let (avg, yoy) = Self::both("Rent analysis", avg, yoy)?;

        let observations = join_rent_records(&avg, &yoy);
        // The rent badge classifies the rounded percentage so it always
        // agrees with the number rendered beside it.
        let rows = rent_summaries(&observations)
            .into_iter()
            .map(|summary| {
                let summary = summary.rounded_for_display();
                RentMarketRow {
                    label: classify(summary.average_yoy, MarketKind::Rent),
                    summary,
                }
            })
            .collect();
        let overview = rent_overview(&observations).rounded_for_display();
        let bedrooms = rent_bedroom_breakdown(&observations)
            .into_iter()
            .map(BedroomMetrics::rounded_for_display)
            .collect();

        let snapshot = RentSnapshot {
            rows,
            overview,
            bedrooms,
            generated_at: Utc::now(),
        };
        Ok(self.rent.commit(token, snapshot))
    }

    async fn refresh_listings(&self, area: Option<&str>) -> Result<Option<Arc<ListingsSnapshot>>> {
        let token = self.listings.begin();
        debug!("Refreshing property listings (request {})", token);

        let listings = match self.provider.fetch_listings(area).await {
            Ok(listings) => listings,
            Err(err) => {
                error!("Listing refresh failed: {}", err);
                return Err(err.into());
            }
        };

        let snapshot = ListingsSnapshot {
            listings,
            generated_at: Utc::now(),
        };
        Ok(self.listings.commit(token, snapshot))
    }

    fn latest_overview(&self) -> Option<Arc<OverviewSnapshot>> {
        self.overview.latest()
    }

    fn latest_county(&self) -> Option<Arc<CountySnapshot>> {
        self.county.latest()
    }

    fn latest_rent(&self) -> Option<Arc<RentSnapshot>> {
        self.rent.latest()
    }

    fn latest_listings(&self) -> Option<Arc<ListingsSnapshot>> {
        self.listings.latest()
    }

    fn filter_listings(&self, filter: &ListingFilter) -> ListingPage {
        match self.listings.latest() {
            Some(snapshot) => snapshot.display_page(filter),
            None => ListingPage {
                listings: Vec::new(),
                shown: 0,
                total: 0,
            },
        }
    }
}
