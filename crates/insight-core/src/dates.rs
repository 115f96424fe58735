//! Lenient parsing for the string dates carried on post records.
//!
//! Front matter usually carries plain `YYYY-MM-DD` dates but full RFC 3339
//! timestamps appear too; both forms are accepted everywhere a date is
//! compared or formatted.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a date string as a calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Parse a date string as a UTC instant.
///
/// Date-only values map to midnight UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Order two date strings newest first.
///
/// Unparseable dates sort after parseable ones; two unparseable dates compare
/// equal so a stable sort keeps their input order.
pub fn compare_desc(a: &str, b: &str) -> std::cmp::Ordering {
    match (parse_datetime(a), parse_datetime(b)) {
        (Some(a_dt), Some(b_dt)) => b_dt.cmp(&a_dt),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_date("2024-03-01").expect("parse");
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 1));
    }

    #[test]
    fn test_parse_rfc3339_date() {
        let date = parse_date("2024-03-01T09:30:00+09:00").expect("parse");
        // 09:30 KST is still March 1st in UTC.
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 1));
    }

    #[test]
    fn test_parse_datetime_midnight() {
        let dt = parse_datetime("2024-03-01").expect("parse");
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.date_naive().day(), 1);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date("not a date").is_none());
        assert!(parse_datetime("2024/03/01").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_ordering_across_forms() {
        let early = parse_datetime("2024-03-01").expect("parse");
        let late = parse_datetime("2024-03-01T12:00:00Z").expect("parse");
        assert!(early < late);
    }

    #[test]
    fn test_compare_desc() {
        let mut dates = vec!["2024-01-01", "garbage", "2024-06-01", "2024-03-01"];
        dates.sort_by(|a, b| compare_desc(a, b));

        assert_eq!(dates, vec!["2024-06-01", "2024-03-01", "2024-01-01", "garbage"]);
    }
}
