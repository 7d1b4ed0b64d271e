//! Property data provider trait definition.
//!
//! This module defines the `PropertyDataProvider` trait the core crate
//! consumes. The dashboard layer only ever sees this trait; the concrete
//! HTTP implementation lives in the `pmx` module.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::FetchError;
use crate::models::{PriceRecord, PropertyListing, RentRecord};

use super::params::{Entity, PriceVariant, RentVariant, SpecificQuery};

/// Trait for property-market data sources.
///
/// Implement this trait to back the dashboard with a different source (the
/// service tests use an in-memory implementation). Every method fetches a
/// fresh copy of the statistic it names; nothing here caches or retries.
///
/// # Example
///
/// ```ignore
/// use propmarket_market_data::{ApiConfig, PmxProvider, PropertyDataProvider};
///
/// let provider = PmxProvider::new(config);
/// let averages = provider.fetch_county_averages().await?;
/// ```
#[async_trait]
pub trait PropertyDataProvider: Send + Sync {
    /// Fetch grouped statistics for every tracked entity of the given kind.
    ///
    /// # Arguments
    ///
    /// * `entity` - The grouping key: county, region, or area
    /// * `variant` - Averaged prices or year-over-year changes
    ///
    /// # Returns
    ///
    /// A map from entity name to the aggregate records observed for it,
    /// or a `FetchError` on failure.
    async fn fetch_grouped(
        &self,
        entity: Entity,
        variant: PriceVariant,
    ) -> Result<HashMap<String, Vec<PriceRecord>>, FetchError>;

    /// Fetch statistics scoped to a single county.
    ///
    /// # Arguments
    ///
    /// * `query` - The county plus optional bedroom/region/area narrowing
    /// * `variant` - Averaged prices or year-over-year changes
    async fn fetch_specific(
        &self,
        query: &SpecificQuery,
        variant: PriceVariant,
    ) -> Result<Vec<PriceRecord>, FetchError>;

    /// Fetch rent statistics across all counties and bedroom counts.
    async fn fetch_rent(&self, variant: RentVariant) -> Result<Vec<RentRecord>, FetchError>;

    /// Fetch individual sale listings, optionally restricted to an area.
    ///
    /// `None` fetches every area (the wire sends the "All" sentinel).
    async fn fetch_listings(
        &self,
        area: Option<&str>,
    ) -> Result<Vec<PropertyListing>, FetchError>;

    /// Mean sale prices grouped by county, as the overview consumes them.
    async fn fetch_county_averages(
        &self,
    ) -> Result<HashMap<String, Vec<PriceRecord>>, FetchError> {
        self.fetch_grouped(Entity::County, PriceVariant::Average)
            .await
    }

    /// Year-over-year sale-price changes grouped by county.
    async fn fetch_county_yoy(&self) -> Result<HashMap<String, Vec<PriceRecord>>, FetchError> {
        self.fetch_grouped(Entity::County, PriceVariant::Yoy).await
    }
}
