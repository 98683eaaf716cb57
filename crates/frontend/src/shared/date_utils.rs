//! Date and time display helpers.
//!
//! The API sends RFC 3339 timestamps (`2025-03-15T14:02:26Z`) or plain dates.
//! Anything that does not parse is shown as received.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use contracts::shared::localized::Locale;

fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format to DD.MM.YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// Format to DD.MM.YYYY
pub fn format_date(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => value.to_string(),
    }
}

/// Long public-site date, e.g. "15 March 2024" / "15 مارس 2024".
pub fn format_long_date(value: &str, locale: Locale) -> String {
    let Some(dt) = parse(value) else {
        return value.to_string();
    };
    let month = match locale {
        Locale::En => dt.format("%B").to_string(),
        Locale::Ar => arabic_month(dt.month()).to_string(),
    };
    format!("{} {} {}", dt.format("%-d"), month, dt.format("%Y"))
}

/// Value for `<input type="datetime-local">`.
pub fn to_input_value(value: &str) -> String {
    parse(value)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// Parses a `datetime-local` input back into an RFC 3339 UTC timestamp.
pub fn from_input_value(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }
    parse(value).map(|dt| dt.and_utc().to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
}

fn arabic_month(month: u32) -> &'static str {
    match month {
        1 => "يناير",
        2 => "فبراير",
        3 => "مارس",
        4 => "أبريل",
        5 => "مايو",
        6 => "يونيو",
        7 => "يوليو",
        8 => "أغسطس",
        9 => "سبتمبر",
        10 => "أكتوبر",
        11 => "نوفمبر",
        _ => "ديسمبر",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(format_long_date("2024-03-05", Locale::En), "5 March 2024");
        assert_eq!(format_long_date("2024-03-05", Locale::Ar), "5 مارس 2024");
    }

    #[test]
    fn test_input_round_trip() {
        assert_eq!(to_input_value("2025-05-01T09:30:00Z"), "2025-05-01T09:30");
        assert_eq!(from_input_value("2025-05-01T09:30").as_deref(), Some("2025-05-01T09:30:00Z"));
        assert_eq!(from_input_value(""), None);
    }
}
