//! Publish date parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date string in the ISO-ish forms content files use.
///
/// Only the calendar date is kept; a time or offset part is accepted and
/// dropped.
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_dates() {
        assert_eq!(parse_date_string("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date_string(" 2024/01/05 "), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn test_parse_with_time() {
        assert_eq!(
            parse_date_string("2023-05-30 10:30:00"),
            Some(ymd(2023, 5, 30))
        );
        assert_eq!(
            parse_date_string("2023-05-30T10:30:00.000Z"),
            Some(ymd(2023, 5, 30))
        );
        assert_eq!(
            parse_date_string("2023-05-30T23:30:00+02:00"),
            Some(ymd(2023, 5, 30))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date_string("yesterday"), None);
        assert_eq!(parse_date_string("2024-13-01"), None);
        assert_eq!(parse_date_string(""), None);
    }
}
