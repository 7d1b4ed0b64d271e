/// Decimal precision for display percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of counties shown on overview charts
pub const OVERVIEW_TOP_COUNTIES: usize = 10;

/// Maximum number of listings rendered on one search page
pub const LISTING_PAGE_SIZE: usize = 100;
