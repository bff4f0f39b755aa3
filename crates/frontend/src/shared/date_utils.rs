/// Utilities for date, time and money formatting
///
/// The backend sends timestamps either as RFC 3339 or as naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` in UTC.
use chrono::{DateTime, NaiveDateTime, Utc};

fn parse(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// "2024-03-15T14:02:26.123Z" -> "Mar 15, 2024 14:02"
pub fn format_datetime(value: &str) -> String {
    parse(value)
        .map(|dt| dt.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "2024-03-15T14:02:26Z" -> "Mar 15, 2024"
pub fn format_date(value: &str) -> String {
    parse(value)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// `None` and empty strings render as "N/A".
pub fn format_opt_date(value: Option<&str>) -> String {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => format_date(v),
        None => "N/A".to_string(),
    }
}

/// `YYYY-MM-DD` for `<input type="date">` values sent as order filters.
pub fn date_input_to_iso(value: &str) -> Option<String> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped number with at most two decimals: 12500.5 -> "12,500.5"
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let mut out = group_thousands(cents / 100);
    let frac = cents % 100;
    if frac != 0 {
        let digits = format!("{:02}", frac);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    if negative && cents != 0 {
        out.insert(0, '-');
    }
    out
}

/// Amount in Iraqi dinars: 12500 -> "12,500 IQD"
pub fn format_iqd(value: f64) -> String {
    format!("{} IQD", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "Mar 15, 2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "Dec 31, 2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05T14:02:26.1234567"), "Mar 5, 2024");
        assert_eq!(format_opt_date(None), "N/A");
        assert_eq!(format_opt_date(Some("")), "N/A");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(date_input_to_iso("15.03.2024"), None);
        assert_eq!(date_input_to_iso("2024-03-15").as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_iqd(0.0), "0 IQD");
        assert_eq!(format_iqd(12500.0), "12,500 IQD");
        assert_eq!(format_number(1234567.5), "1,234,567.5");
        assert_eq!(format_number(999.999), "1,000");
        assert_eq!(format_number(-42.25), "-42.25");
    }
}
