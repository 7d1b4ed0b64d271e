use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One aggregate monthly-rent observation for a (county, bedroom count) pair.
///
/// The averaged variant fills `avg` (euro per month); the year-over-year
/// variant fills `avg_yoy` (percent). The rent views join the two variants
/// by exact (county, beds) identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentRecord {
    /// County the observation belongs to
    #[serde(default)]
    pub county: String,

    /// Bedroom count, pre-bucketed upstream (6 covers "six or more")
    #[serde(default)]
    pub beds: u8,

    /// Mean monthly rent in euro (averaged variant)
    #[serde(default)]
    pub avg: Option<Decimal>,

    /// Year-over-year rent change in percent (yoy variant)
    #[serde(default)]
    pub avg_yoy: Option<Decimal>,
}

impl RentRecord {
    /// A record without a county or with a zero bedroom count identifies
    /// nothing and is dropped at ingest.
    pub fn is_well_formed(&self) -> bool {
        !self.county.is_empty() && self.beds > 0
    }
}
