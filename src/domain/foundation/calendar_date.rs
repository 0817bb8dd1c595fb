//! Calendar date value object stored as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::DateParseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Naive date-time layouts accepted from remote APIs, tried in order.
/// `%.f` also matches an absent fractional part.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A day on the calendar, without time of day or zone.
///
/// Serializes as `YYYY-MM-DD`. Deserialization also accepts a full timestamp
/// and keeps only its date, so files written by older tooling still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns `None` for impossible dates such as February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a strict `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Result<Self, DateParseError> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateParseError::new(value))
    }

    /// Reads the calendar date out of an ISO 8601 style timestamp.
    ///
    /// Accepts RFC 3339 (`2025-03-01T12:00:00Z`), offsets without a colon,
    /// naive date-times with `T` or a space, and bare dates. The date is the
    /// one written in the timestamp; no zone conversion is applied.
    pub fn from_timestamp(raw: &str) -> Result<Self, DateParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DateParseError::new(raw));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.date_naive()));
        }
        if let Ok(dt) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Ok(Self(dt.date_naive()));
        }
        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(dt.date()));
            }
        }

        Self::parse(trimmed).map_err(|_| DateParseError::new(raw))
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
