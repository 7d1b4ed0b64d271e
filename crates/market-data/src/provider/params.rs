use serde::{Deserialize, Serialize};

/// The grouping entity for grouped statistics requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    County,
    Region,
    Area,
}

impl Entity {
    /// The wire value of the `entity` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::County => "county",
            Self::Region => "region",
            Self::Area => "area",
        }
    }
}

/// Which sale-price statistic to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceVariant {
    /// Mean sale prices (`avg` on the records)
    Average,
    /// Year-over-year changes (`yoy` on the records)
    Yoy,
}

impl PriceVariant {
    /// The wire value of the `version` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Yoy => "yoy",
        }
    }
}

/// Which rent statistic to request.
///
/// The rent endpoint spells its averaged variant "avg" where the price
/// endpoints spell theirs "average"; this enum keeps that wire asymmetry
/// out of caller code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentVariant {
    /// Mean monthly rents (`avg` on the records)
    Average,
    /// Year-over-year changes (`avg_yoy` on the records)
    Yoy,
}

impl RentVariant {
    /// The wire value of the `version` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "avg",
            Self::Yoy => "yoy",
        }
    }
}

/// Scope for a single-county statistics request.
///
/// Everything except the county is optional. Bedroom counts serialize as
/// the wire's comma-separated list ("2,3,4").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecificQuery {
    /// County to fetch statistics for
    pub county: String,

    /// Restrict to these bedroom counts
    pub beds: Option<Vec<u8>>,

    /// Restrict to a region within the county
    pub region: Option<String>,

    /// Restrict to an area within the region
    pub area: Option<String>,
}

impl SpecificQuery {
    /// A query scoped to a county alone.
    pub fn new(county: &str) -> Self {
        Self {
            county: county.to_string(),
            ..Self::default()
        }
    }

    /// The `beds` query parameter value, when bedroom-scoped.
    pub fn beds_param(&self) -> Option<String> {
        self.beds.as_ref().map(|beds| {
            beds.iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
    }
}
