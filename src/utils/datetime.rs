//! Date and time utility functions
//!
//! Callers usually receive formation-date bounds as plain dates or RFC 3339
//! timestamps. These helpers turn them into the UTC instants the mission
//! filters compare against, so that a date-only end bound covers the whole day.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Date format accepted for date-only bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// First instant of the day, in UTC
pub fn start_of_day(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}

/// Last representable instant of the day, in UTC
pub fn end_of_day(d: NaiveDate) -> DateTime<Utc> {
    start_of_day(d) + Duration::days(1) - Duration::nanoseconds(1)
}

/// Parse a lower bound: an RFC 3339 timestamp, or a date meaning its first instant
pub fn parse_start_bound(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(_) => parse_date(value).map(start_of_day),
    }
}

/// Parse an upper bound: an RFC 3339 timestamp, or a date meaning its last instant
pub fn parse_end_bound(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(_) => parse_date(value).map(end_of_day),
    }
}
