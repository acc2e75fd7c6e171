//! Page timestamp selection.

use chrono::{DateTime, SecondsFormat, Utc};

/// Timestamp to show for a page: the modification time when it is later
/// than the publication time, else the publication time.
pub fn display_datetime(
    pub_datetime: Option<DateTime<Utc>>,
    mod_datetime: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    match (pub_datetime, mod_datetime) {
        (Some(published), Some(modified)) if modified > published => Some(modified),
        (Some(published), _) => Some(published),
        (None, modified) => modified,
    }
}

/// Render a page timestamp as RFC 3339 with seconds, or as the date alone.
pub fn format_datetime(datetime: DateTime<Utc>, with_time: bool) -> String {
    if with_time {
        datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
    } else {
        datetime.format("%Y-%m-%d").to_string()
    }
}
