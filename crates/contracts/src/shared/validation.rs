//! Client-side checks run before a create/update request is attempted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::localized::LocalizedText;

/// Pre-flight validation of a form DTO.
pub trait Validate {
    /// `Err` carries the message shown to the user; no request is sent.
    fn validate(&self) -> Result<(), String>;
}

/// Collections that are only listed and deleted carry no form.
impl Validate for () {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

pub fn require_text(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

/// At least one translation must be non-blank.
pub fn require_localized(value: &LocalizedText, field: &str) -> Result<(), String> {
    if value.is_blank() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

/// Loose shape check; the API has the final word on addresses.
pub fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

pub fn optional_email(value: Option<&str>, field: &str) -> Result<(), String> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(email) if !is_plausible_email(email) => Err(format!("{field} is not a valid email address")),
        _ => Ok(()),
    }
}

/// Integer form input; blank means 0.
pub fn parse_whole_number(value: &str, field: &str) -> Result<i32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse()
        .map_err(|_| format!("{field} must be a whole number"))
}

/// Date or date-time as entered in forms or shipped by the API.
///
/// RFC 3339 values are normalised to UTC; values without an offset
/// (`2026-05-10T09:30`, `2026-05-10`) are taken as they are.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0))
}

pub fn require_timestamp(value: &str, field: &str) -> Result<NaiveDateTime, String> {
    require_text(value, field)?;
    parse_timestamp(value).ok_or_else(|| format!("{field} is not a valid date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("  ", "Name").is_err());
        assert_eq!(require_text("", "Title").unwrap_err(), "Title is required");
        assert!(require_text("x", "Name").is_ok());
    }

    #[test]
    fn test_require_localized_accepts_either_language() {
        assert!(require_localized(&LocalizedText::pair("", "قسم"), "Name").is_ok());
        assert!(require_localized(&LocalizedText::pair("Section", ""), "Name").is_ok());
        assert!(require_localized(&LocalizedText::pair(" ", ""), "Name").is_err());
        assert!(require_localized(&LocalizedText::default(), "Name").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_plausible_email("head@institute.org"));
        assert!(!is_plausible_email("head@institute"));
        assert!(!is_plausible_email("@institute.org"));
        assert!(!is_plausible_email("institute.org"));
        assert!(optional_email(None, "Email").is_ok());
        assert!(optional_email(Some(""), "Email").is_ok());
        assert!(optional_email(Some("bad"), "Email").is_err());
    }

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number(" 7 ", "Display order"), Ok(7));
        assert_eq!(parse_whole_number("-2", "Display order"), Ok(-2));
        assert_eq!(parse_whole_number("", "Display order"), Ok(0));
        assert_eq!(
            parse_whole_number("3.5", "Display order").unwrap_err(),
            "Display order must be a whole number"
        );
        assert!(parse_whole_number("first", "Display order").is_err());
    }

    #[test]
    fn test_parse_timestamp_respects_offsets() {
        let start = parse_timestamp("2025-05-01T10:00:00+03:00").unwrap();
        let end = parse_timestamp("2025-05-01T08:30:00Z").unwrap();
        assert!(end > start);
        assert_eq!(
            parse_timestamp("2026-05-10"),
            NaiveDate::from_ymd_opt(2026, 5, 10).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert!(parse_timestamp("2026-05-10T09:30").is_some());
        assert!(parse_timestamp("next tuesday").is_none());
    }

    #[test]
    fn test_require_timestamp() {
        assert_eq!(require_timestamp("", "Start date").unwrap_err(), "Start date is required");
        assert_eq!(require_timestamp("10/05/2026", "Start date").unwrap_err(), "Start date is not a valid date");
        assert!(require_timestamp("2026-05-10", "Start date").is_ok());
    }
}
