//! PMX analytics provider implementation.
//!
//! This provider fetches Irish property-market statistics from a
//! PMX-compatible analytics API. Credentials travel as `key` and `domain`
//! query parameters on every call.
//!
//! # API Endpoints
//!
//! - Grouped statistics: `GET {base}/api/pmx/all?entity=county&version=average`
//! - County statistics: `GET {base}/api/pmx/average` and `GET {base}/api/pmx/yoy`
//! - Rent statistics: `GET {base}/api/pmx/rent?version=avg`
//! - Sale listings: `GET {base}/api/eval/property?area=All`
//!
//! # Response Format
//!
//! Envelopes vary between bare record lists and objects keyed by entity
//! name or row id; [`PmxPayload`] normalizes them. Records that survive
//! decoding but are malformed (no county, zero bedroom count) are dropped
//! with a logged count, never an error.

mod payload;

pub use payload::PmxPayload;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::errors::FetchError;
use crate::models::{PriceRecord, PropertyListing, RentRecord};
use crate::provider::{
    ApiConfig, Entity, PriceVariant, PropertyDataProvider, RentVariant, SpecificQuery,
};

const GROUPED_PATH: &str = "/api/pmx/all";
const AVERAGE_PATH: &str = "/api/pmx/average";
const YOY_PATH: &str = "/api/pmx/yoy";
const RENT_PATH: &str = "/api/pmx/rent";
const LISTINGS_PATH: &str = "/api/eval/property";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// PMX provider for fetching property-market statistics.
///
/// # Example
///
/// ```ignore
/// let config = ApiConfig::new(base_url, api_key, domain);
/// let provider = PmxProvider::new(config);
/// let counties = provider.fetch_county_averages().await?;
/// ```
pub struct PmxProvider {
    client: Client,
    config: ApiConfig,
}

impl PmxProvider {
    /// Create a provider over the given connection settings.
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Send a GET with credentials attached and decode the JSON body.
    async fn fetch<P: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<P, FetchError> {
        if !self.config.is_configured() {
            return Err(FetchError::NotConfigured);
        }
        if self.config.base_url.is_empty() {
            return Err(FetchError::InvalidUrl("base URL is empty".to_string()));
        }

        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("domain", self.config.domain.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Drop records failing `is_valid`, logging the discard count.
    fn keep_well_formed<T>(
        records: Vec<T>,
        endpoint: &str,
        is_valid: impl Fn(&T) -> bool,
    ) -> Vec<T> {
        let before = records.len();
        let kept: Vec<T> = records.into_iter().filter(|r| is_valid(r)).collect();
        let dropped = before - kept.len();
        if dropped > 0 {
            warn!("Dropped {} malformed record(s) from {}", dropped, endpoint);
        }
        kept
    }

    /// Clean up one envelope group: fill counties from the envelope key
    /// (authoritative for county-grouped data), re-apply the upstream 6+
    /// pre-bucketing, and drop zero-bed records. Flat payloads regroup by
    /// the records' own county field, so county-less records collect under
    /// an empty key; that group identifies nothing and is dropped here.
    fn sanitize_grouped(
        entity: Entity,
        mut groups: HashMap<String, Vec<PriceRecord>>,
    ) -> HashMap<String, Vec<PriceRecord>> {
        let orphans = groups.remove("").unwrap_or_default();
        if !orphans.is_empty() {
            warn!(
                "Dropped {} record(s) without a county from {}",
                orphans.len(),
                GROUPED_PATH
            );
        }

        groups
            .into_iter()
            .map(|(name, records)| {
                let records: Vec<PriceRecord> = records
                    .into_iter()
                    .map(|mut record| {
                        if record.county.is_empty() && entity == Entity::County {
                            record.county = name.clone();
                        }
                        record.beds = record.beds.min(6);
                        record
                    })
                    .collect();
                // The envelope key carries identity here, so a missing
                // county alone does not disqualify a record.
                let records =
                    Self::keep_well_formed(records, GROUPED_PATH, |r: &PriceRecord| r.beds > 0);
                (name, records)
            })
            .collect()
    }

    /// Clean up county-scoped records: the query's county is authoritative
    /// when a record omits its own.
    fn sanitize_specific(query: &SpecificQuery, records: Vec<PriceRecord>) -> Vec<PriceRecord> {
        let records: Vec<PriceRecord> = records
            .into_iter()
            .map(|mut record| {
                if record.county.is_empty() {
                    record.county = query.county.clone();
                }
                record.beds = record.beds.min(6);
                record
            })
            .collect();
        Self::keep_well_formed(records, "county statistics", PriceRecord::is_well_formed)
    }

    fn sanitize_rent(records: Vec<RentRecord>) -> Vec<RentRecord> {
        let records: Vec<RentRecord> = records
            .into_iter()
            .map(|mut record| {
                record.beds = record.beds.min(6);
                record
            })
            .collect();
        Self::keep_well_formed(records, RENT_PATH, RentRecord::is_well_formed)
    }

    /// Listings keep their raw bedroom counts; only county-less rows drop.
    fn sanitize_listings(listings: Vec<PropertyListing>) -> Vec<PropertyListing> {
        Self::keep_well_formed(listings, LISTINGS_PATH, PropertyListing::is_well_formed)
    }
}

#[async_trait]
impl PropertyDataProvider for PmxProvider {
    async fn fetch_grouped(
        &self,
        entity: Entity,
        variant: PriceVariant,
    ) -> Result<HashMap<String, Vec<PriceRecord>>, FetchError> {
        let payload: PmxPayload<PriceRecord> = self
            .fetch(
                GROUPED_PATH,
                &[("entity", entity.as_str()), ("version", variant.as_str())],
            )
            .await?;

        let groups = payload.into_groups(|record| record.county.clone());
        Ok(Self::sanitize_grouped(entity, groups))
    }

    async fn fetch_specific(
        &self,
        query: &SpecificQuery,
        variant: PriceVariant,
    ) -> Result<Vec<PriceRecord>, FetchError> {
        let path = match variant {
            PriceVariant::Average => AVERAGE_PATH,
            PriceVariant::Yoy => YOY_PATH,
        };

        let beds = query.beds_param();
        let mut params: Vec<(&str, &str)> = vec![("county", query.county.as_str())];
        if let Some(beds) = beds.as_deref() {
            params.push(("beds", beds));
        }
        if let Some(region) = query.region.as_deref() {
            params.push(("region", region));
        }
        if let Some(area) = query.area.as_deref() {
            params.push(("area", area));
        }

        let payload: PmxPayload<PriceRecord> = self.fetch(path, &params).await?;
        Ok(Self::sanitize_specific(query, payload.into_records()))
    }

    async fn fetch_rent(&self, variant: RentVariant) -> Result<Vec<RentRecord>, FetchError> {
        let payload: PmxPayload<RentRecord> = self
            .fetch(RENT_PATH, &[("version", variant.as_str())])
            .await?;

        Ok(Self::sanitize_rent(payload.into_records()))
    }

    async fn fetch_listings(
        &self,
        area: Option<&str>,
    ) -> Result<Vec<PropertyListing>, FetchError> {
        let payload: PmxPayload<PropertyListing> = self
            .fetch(LISTINGS_PATH, &[("area", area.unwrap_or("All"))])
            .await?;

        Ok(Self::sanitize_listings(payload.into_records()))
    }
}
