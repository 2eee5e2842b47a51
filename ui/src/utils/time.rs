use jiff::{Timestamp, Zoned, tz};

/// Localize a timestamp to the reader's timezone.
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(tz::TimeZone::system())
}

/// Short date used on listings, e.g. "May 14, 2024".
pub fn format_date(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp).strftime("%B %d, %Y").to_string()
}
