use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One aggregate sale-price observation for a (county, bedroom count) pair.
///
/// The same record shape serves both statistic variants: the averaged
/// variant fills `avg`, the year-over-year variant fills `yoy`. Combined
/// payloads may also carry `avg_yoy` and a spot `price`. Absent statistics
/// stay `None` and never contribute to a mean.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// County the observation belongs to
    #[serde(default)]
    pub county: String,

    /// Bedroom count, pre-bucketed upstream (6 covers "six or more")
    #[serde(default)]
    pub beds: u8,

    /// Mean sale price in euro (averaged variant)
    #[serde(default)]
    pub avg: Option<Decimal>,

    /// Year-over-year price change in percent (yoy variant)
    #[serde(default)]
    pub yoy: Option<Decimal>,

    /// Year-over-year change of the average, on combined payloads
    #[serde(default)]
    pub avg_yoy: Option<Decimal>,

    /// Spot price in euro, on combined payloads
    #[serde(default)]
    pub price: Option<Decimal>,

    /// Region within the county, when the query was region-scoped
    #[serde(default)]
    pub region: Option<String>,

    /// Area within the region, when the query was area-scoped
    #[serde(default)]
    pub area: Option<String>,
}

impl PriceRecord {
    /// A record without a county or with a zero bedroom count identifies
    /// nothing and is dropped at ingest.
    pub fn is_well_formed(&self) -> bool {
        !self.county.is_empty() && self.beds > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserializes_average_variant() {
        let json = r#"{"county": "Dublin", "beds": 3, "avg": 450000.5}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.county, "Dublin");
        assert_eq!(record.beds, 3);
        assert_eq!(record.avg, Some(dec!(450000.5)));
        assert!(record.yoy.is_none());
        assert!(record.is_well_formed());
    }

    #[test]
    fn test_deserializes_yoy_variant() {
        let json = r#"{"county": "Cork", "beds": 2, "yoy": -3.25}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.yoy, Some(dec!(-3.25)));
        assert!(record.avg.is_none());
    }

    #[test]
    fn test_missing_key_fields_are_tolerated_but_flagged() {
        let json = r#"{"avg": 300000}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.county, "");
        assert_eq!(record.beds, 0);
        assert!(!record.is_well_formed());
    }

    #[test]
    fn test_scoped_fields_round_trip() {
        let json = r#"{"county": "Galway", "beds": 4, "avg": 320000, "region": "Connacht", "area": "Salthill"}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.region.as_deref(), Some("Connacht"));
        assert_eq!(record.area.as_deref(), Some("Salthill"));
    }
}
