//! Market temperature classification.
//!
//! Turns a year-over-year percentage change into the qualitative label a
//! dashboard badge renders. The sale and rent ladders are intentionally
//! asymmetric: sale prices can read Declining but never VeryHot, while rents
//! can read VeryHot but never Declining. Falling rents settle at Stable.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Which market a year-over-year change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    /// Sale prices
    Sale,
    /// Monthly rents
    Rent,
}

/// Qualitative market temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketLabel {
    VeryHot,
    Hot,
    Growing,
    Stable,
    Declining,
}

impl MarketLabel {
    /// The badge text the dashboard renders.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketLabel::VeryHot => "Very Hot",
            MarketLabel::Hot => "Hot Market",
            MarketLabel::Growing => "Growing",
            MarketLabel::Stable => "Stable",
            MarketLabel::Declining => "Declining",
        }
    }
}

impl fmt::Display for MarketLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a year-over-year percentage change.
///
/// Every finite input maps to exactly one label and all boundaries are
/// strict: a sale change of exactly 5 reads Growing, not Hot, and a change
/// of exactly 0 reads Stable for both markets.
///
/// Sale ladder: above 5 is Hot, above 0 Growing, above -5 Stable, anything
/// at or below -5 Declining. Rent ladder: above 10 is VeryHot, above 5 Hot,
/// above 0 Growing, everything else Stable.
pub fn classify(yoy_percent: Decimal, kind: MarketKind) -> MarketLabel {
    match kind {
        MarketKind::Sale => {
            if yoy_percent > dec!(5) {
                MarketLabel::Hot
            } else if yoy_percent > Decimal::ZERO {
                MarketLabel::Growing
            } else if yoy_percent > dec!(-5) {
                MarketLabel::Stable
            } else {
                MarketLabel::Declining
            }
        }
        MarketKind::Rent => {
            if yoy_percent > dec!(10) {
                MarketLabel::VeryHot
            } else if yoy_percent > dec!(5) {
                MarketLabel::Hot
            } else if yoy_percent > Decimal::ZERO {
                MarketLabel::Growing
            } else {
                MarketLabel::Stable
            }
        }
    }
}
