use chrono::{DateTime, NaiveDate};

pub const INPUT_FORMAT: &str = "%Y-%m-%d";
pub const BACKEND_FORMAT: &str = "%d-%m-%Y";
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parses a date as it may arrive from the backend: an RFC 3339
/// timestamp, an ISO calendar date, or a DD-MM-YYYY calendar date.
/// Time-of-day is discarded.
pub fn parse_flexible(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, INPUT_FORMAT) {
        return Some(date);
    }
    NaiveDate::parse_from_str(value, BACKEND_FORMAT).ok()
}

/// Transport format -> YYYY-MM-DD for calendar inputs. Values that do
/// not parse collapse to empty so the editor shows a blank date.
pub fn to_input_format(value: &str) -> String {
    parse_flexible(value)
        .map(|date| date.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Calendar-input format -> DD-MM-YYYY for the backend. Values that do
/// not parse are passed through untouched.
pub fn to_backend_format(value: &str) -> String {
    match parse_flexible(value) {
        Some(date) => date.format(BACKEND_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// Localized table display; empty or unparseable dates render as "-".
pub fn to_display_format(value: &str) -> String {
    parse_flexible(value)
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_timestamps() {
        let date = parse_flexible("2024-03-05T00:00:00.000Z").unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
    }

    #[test]
    fn parses_backend_calendar_dates() {
        let date = parse_flexible("05-03-2024").unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
    }

    #[test]
    fn input_backend_round_trip_preserves_the_date() {
        let original = "2024-01-01";
        let backend = to_backend_format(original);
        assert_eq!(backend, "01-01-2024");
        assert_eq!(to_input_format(&backend), original);
    }

    #[test]
    fn transport_timestamp_normalizes_for_input() {
        assert_eq!(to_input_format("2025-12-31T10:30:00+00:00"), "2025-12-31");
        assert_eq!(to_input_format(""), "");
        assert_eq!(to_input_format("not a date"), "");
    }

    #[test]
    fn unparseable_backend_values_pass_through() {
        assert_eq!(to_backend_format("12 months"), "12 months");
        assert_eq!(to_backend_format(""), "");
    }

    #[test]
    fn display_falls_back_to_dash() {
        assert_eq!(to_display_format("2024-01-31"), "31/01/2024");
        assert_eq!(to_display_format(""), "-");
        assert_eq!(to_display_format("garbage"), "-");
    }
}
