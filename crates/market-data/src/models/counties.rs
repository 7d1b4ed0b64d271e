/// The counties the analytics API tracks, in the order the county analysis
/// view presents them. County names are matched case-sensitively everywhere
/// in this workspace; the presentation layer uses this list to populate its
/// county selector.
pub const TRACKED_COUNTIES: [&str; 14] = [
    "Dublin",
    "Cork",
    "Galway",
    "Limerick",
    "Waterford",
    "Kerry",
    "Mayo",
    "Donegal",
    "Wicklow",
    "Meath",
    "Kildare",
    "Wexford",
    "Clare",
    "Tipperary",
];
