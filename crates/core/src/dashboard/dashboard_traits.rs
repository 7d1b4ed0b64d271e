//! Dashboard service traits.

use std::sync::Arc;

use async_trait::async_trait;

use super::dashboard_model::{CountySnapshot, ListingsSnapshot, OverviewSnapshot, RentSnapshot};
use crate::errors::Result;
use crate::filtering::{ListingFilter, ListingPage};

/// Trait defining the contract for dashboard refresh and read operations.
///
/// Refresh methods return `Ok(None)` when the response was superseded by a
/// newer refresh of the same view (last request wins); errors leave the
/// previously published snapshot in place.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Refresh the sale overview.
    ///
    /// Fetches the per-county average and yoy groupings in parallel,
    /// aggregates them into ranked summaries and national cards, and
    /// publishes the result.
    async fn refresh_overview(&self) -> Result<Option<Arc<OverviewSnapshot>>>;

    /// Refresh the bedroom drilldown for one county.
    ///
    /// # Arguments
    /// * `county` - Canonical county name as the API spells it
    async fn refresh_county(&self, county: &str) -> Result<Option<Arc<CountySnapshot>>>;

    /// Refresh the rent analysis view.
    async fn refresh_rent(&self) -> Result<Option<Arc<RentSnapshot>>>;

    /// Refresh the listing search collection.
    ///
    /// # Arguments
    /// * `area` - Optional area narrowing; `None` fetches everything
    async fn refresh_listings(&self, area: Option<&str>) -> Result<Option<Arc<ListingsSnapshot>>>;

    /// Latest published sale overview, if any refresh has completed.
    fn latest_overview(&self) -> Option<Arc<OverviewSnapshot>>;

    /// Latest published county drilldown, if any refresh has completed.
    fn latest_county(&self) -> Option<Arc<CountySnapshot>>;

    /// Latest published rent analysis, if any refresh has completed.
    fn latest_rent(&self) -> Option<Arc<RentSnapshot>>;

    /// Latest published listing collection, if any refresh has completed.
    fn latest_listings(&self) -> Option<Arc<ListingsSnapshot>>;

    /// Filter the latest listing collection for rendering.
    ///
    /// Returns an empty page when no listing snapshot exists yet.
    fn filter_listings(&self, filter: &ListingFilter) -> ListingPage;
}
