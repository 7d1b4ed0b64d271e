use std::fmt;

use serde::{Deserialize, Serialize};

/// The six bedroom buckets every breakdown view displays.
///
/// The analytics API pre-buckets aggregate records: anything with six or
/// more bedrooms arrives as `beds == 6`. Individual listings keep their raw
/// counts, which is why [`BedroomBucket::SixPlus`] matches 6, 7, 8, ...
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BedroomBucket {
    One,
    Two,
    Three,
    Four,
    Five,
    SixPlus,
}

impl BedroomBucket {
    /// All buckets in display order.
    pub const ALL: [BedroomBucket; 6] = [
        BedroomBucket::One,
        BedroomBucket::Two,
        BedroomBucket::Three,
        BedroomBucket::Four,
        BedroomBucket::Five,
        BedroomBucket::SixPlus,
    ];

    /// The bucket for a raw bedroom count. Zero is not a valid count.
    pub fn from_beds(beds: u8) -> Option<Self> {
        match beds {
            0 => None,
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            _ => Some(Self::SixPlus),
        }
    }

    /// The bedroom count aggregate records in this bucket carry.
    /// The 6+ bucket carries 6, matching the upstream pre-bucketing.
    pub fn beds(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::SixPlus => 6,
        }
    }

    /// The display label: "1" through "5", then "6+".
    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::SixPlus => "6+",
        }
    }

    /// True when a raw bedroom count belongs to this bucket: exact match
    /// for 1 through 5, six-or-more for the 6+ bucket.
    pub fn contains(&self, beds: u8) -> bool {
        match self {
            Self::SixPlus => beds >= 6,
            _ => beds == self.beds(),
        }
    }
}

impl fmt::Display for BedroomBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
