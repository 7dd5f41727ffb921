//! Date helper functions

use chrono::{Datelike, Locale, NaiveDate, TimeZone, Utc};

/// Format a publish date for display in the given locale
///
/// Produces the long form: `January 5, 2024` for English locales, day first
/// (`5 stycznia 2024`) for the others. Unknown locale tags fall back to
/// `en-US`.
///
/// # Examples
/// ```ignore
/// format_date(&date, "en-US") // -> "January 5, 2024"
/// ```
pub fn format_date(date: &NaiveDate, locale: &str) -> String {
    let locale = parse_locale(locale);
    let pattern = if locale_language(&locale) == "en" {
        "%B %-d, %Y"
    } else {
        "%-d %B %Y"
    };

    let midnight = match date.and_hms_opt(0, 0, 0) {
        Some(dt) => dt,
        None => return date.format("%Y-%m-%d").to_string(),
    };
    Utc.from_utc_datetime(&midnight)
        .format_localized(pattern, locale)
        .to_string()
}

/// Copyright year for the footer
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Map a BCP 47 tag like `en-US` to a chrono locale
fn parse_locale(tag: &str) -> Locale {
    let normalized = tag.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).unwrap_or_else(|_| {
        tracing::debug!("Unknown locale '{}', using en-US", tag);
        Locale::en_US
    })
}

fn locale_language(locale: &Locale) -> &'static str {
    match locale {
        Locale::en_US
        | Locale::en_GB
        | Locale::en_AU
        | Locale::en_CA
        | Locale::en_IE
        | Locale::en_NZ => "en",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_en_us() {
        assert_eq!(format_date(&ymd(2024, 1, 5), "en-US"), "January 5, 2024");
        assert_eq!(format_date(&ymd(2023, 12, 25), "en-US"), "December 25, 2023");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(format_date(&ymd(2024, 1, 5), "xx-YY"), "January 5, 2024");
        assert_eq!(format_date(&ymd(2024, 1, 5), ""), "January 5, 2024");
    }

    #[test]
    fn test_non_english_is_day_first() {
        let formatted = format_date(&ymd(2024, 1, 5), "pl-PL");
        assert!(formatted.starts_with("5 "));
        assert!(formatted.ends_with(" 2024"));
    }
}
