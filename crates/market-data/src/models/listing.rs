use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One realized sale as returned by the property evaluation endpoint.
///
/// Field names follow the wire contract (camelCase). Bedroom counts on
/// listings are NOT pre-bucketed: a nine-bedroom house arrives as 9, which
/// is what lets the "6+" search filter match it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    /// County of the sale
    #[serde(default)]
    pub county: String,

    /// Region within the county
    #[serde(default)]
    pub region: String,

    /// Area within the region
    #[serde(default)]
    pub area: String,

    /// Raw bedroom count (zero for sites and unknowns)
    #[serde(default)]
    pub beds: u8,

    /// Sale price in euro
    #[serde(default)]
    pub price: Decimal,

    /// Address as recorded in the price register
    #[serde(default)]
    pub raw_address: String,

    /// Free-form location description, present on some payloads
    #[serde(default)]
    pub location: Option<String>,

    /// Sale date as an ISO-8601 date string
    #[serde(default)]
    pub sale_date: String,

    /// Floor area in square metres; absent or zero means unknown
    #[serde(default)]
    pub sqr_metres: Option<Decimal>,
}

impl PropertyListing {
    /// A listing without a county cannot be grouped or filtered and is
    /// dropped at ingest. A zero bedroom count is valid here (sites).
    pub fn is_well_formed(&self) -> bool {
        !self.county.is_empty()
    }

    /// The sale date parsed from its wire string ("YYYY-MM-DD").
    /// Listings with an unparseable date still render, just without one.
    pub fn parsed_sale_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.sale_date, "%Y-%m-%d").ok()
    }
}
