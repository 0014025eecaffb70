use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Renders a backend timestamp the way the match cards show it: `DD.MM.YYYY, HH:MM`.
///
/// Accepts RFC 3339 timestamps (shown in their own offset), naive ISO datetimes as sent by the
/// backend, and plain dates. Returns `None` when the input is not a recognizable date.
pub fn format_date(input: &str) -> Option<String> {
    parse_datetime(input.trim()).map(|dt| dt.format("%d.%m.%Y, %H:%M").to_string())
}

/// Player counter shown on match cards, e.g. `"7/10"`. A missing count renders as `0`.
pub fn players_text(current: Option<u32>, max: u32) -> String {
    format!("{}/{}", current.unwrap_or(0), max)
}
