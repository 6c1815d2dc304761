//! Satellite records as delivered by the satellite API
//!
//! Records are immutable once received. A refresh replaces the whole
//! collection; nothing here is ever patched in place.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a satellite, unique within one snapshot
///
/// The reference backend sends integers, but string ids are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SatelliteId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for SatelliteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatelliteId::Numeric(n) => write!(f, "{}", n),
            SatelliteId::Text(s) => f.write_str(s),
        }
    }
}

/// Launch date as sent by the API, plus its parsed calendar date
///
/// Unparseable strings are kept (`date == None`) rather than rejected, so one
/// odd record never takes down the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LaunchDate {
    raw: String,
    date: Option<NaiveDate>,
}

impl LaunchDate {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let date = parse_calendar_date(&raw);
        Self { raw, date }
    }

    /// The string exactly as received
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }
}

impl From<String> for LaunchDate {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<LaunchDate> for String {
    fn from(date: LaunchDate) -> Self {
        date.raw
    }
}

impl fmt::Display for LaunchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => f.write_str("Invalid Date"),
        }
    }
}

/// Date-times with an explicit offset (`+00:00` or `+0000`)
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Offset-less date-times; seconds are optional
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Accepts ISO 8601 dates and date-times in their common shapes, plus the
/// truncated `YYYY-MM` and `YYYY` forms (first day of the period).
///
/// Offsets are honored as written: the calendar date is the one in the
/// record's own offset.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.date_naive());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.date());
    }
    parse_truncated_date(raw)
}

/// `YYYY-MM` or `YYYY`
fn parse_truncated_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('-');
    let year = parts.next().filter(|y| y.len() == 4)?;
    let month = match parts.next() {
        Some(m) if m.len() == 2 => m,
        Some(_) => return None,
        None => "1",
    };
    if parts.next().is_some() {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// A single tracked satellite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteRecord {
    pub id: SatelliteId,
    pub name: String,
    pub orbit_type: String,
    pub status: String,
    pub launch_date: LaunchDate,
}

impl SatelliteRecord {
    /// Whole days between launch and `today` (negative for future launches)
    pub fn mission_days(&self, today: NaiveDate) -> Option<i64> {
        self.launch_date
            .date()
            .map(|launched| (today - launched).num_days())
    }
}

/// Body of `GET /satellites`
///
/// Only `satellites` is required. The reference backend also reports a count
/// and a generation timestamp, which are informational.
#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteEnvelope {
    pub satellites: Vec<SatelliteRecord>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamped_dates() {
        assert_eq!(
            LaunchDate::parse("1998-11-20").date(),
            NaiveDate::from_ymd_opt(1998, 11, 20)
        );
        assert_eq!(
            LaunchDate::parse("2021-12-25T12:20:00Z").date(),
            NaiveDate::from_ymd_opt(2021, 12, 25)
        );
        assert_eq!(
            LaunchDate::parse("2016-11-19T23:42:00").year(),
            Some(2016)
        );
    }

    #[test]
    fn parses_date_times_without_seconds_or_with_space() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert_eq!(LaunchDate::parse("2020-01-01T12:00").date(), expected);
        assert_eq!(LaunchDate::parse("2020-01-01 12:00").date(), expected);
        assert_eq!(LaunchDate::parse("2020-01-01 12:00:00").date(), expected);
        assert_eq!(LaunchDate::parse("2020-01-01 12:00:00.250").date(), expected);
    }

    #[test]
    fn parses_offsets_without_colon() {
        assert_eq!(
            LaunchDate::parse("2020-01-01T00:00:00+0000").date(),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
        assert_eq!(
            LaunchDate::parse("2019-07-16T23:30:00.5-0500").date(),
            NaiveDate::from_ymd_opt(2019, 7, 16)
        );
    }

    #[test]
    fn truncated_dates_start_the_period() {
        assert_eq!(
            LaunchDate::parse("2020-06").date(),
            NaiveDate::from_ymd_opt(2020, 6, 1)
        );
        assert_eq!(
            LaunchDate::parse("1977").date(),
            NaiveDate::from_ymd_opt(1977, 1, 1)
        );
        assert_eq!(LaunchDate::parse("2020-13").date(), None);
        assert_eq!(LaunchDate::parse("20-06").date(), None);
        assert_eq!(LaunchDate::parse("2020-06-01-01").date(), None);
    }

    #[test]
    fn keeps_unparseable_dates() {
        let date = LaunchDate::parse("sometime in 1990");
        assert_eq!(date.date(), None);
        assert_eq!(date.raw(), "sometime in 1990");
        assert_eq!(date.to_string(), "Invalid Date");
    }

    #[test]
    fn deserializes_numeric_and_text_ids() {
        let json = r#"[
            {"id": 7, "name": "GOES-16", "orbit_type": "Geostationary",
             "status": "Active", "launch_date": "2016-11-19"},
            {"id": "sv-01", "name": "GPS III SV01", "orbit_type": "Medium Earth Orbit",
             "status": "Active", "launch_date": "2018-12-23"}
        ]"#;

        let records: Vec<SatelliteRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].id, SatelliteId::Numeric(7));
        assert_eq!(records[1].id, SatelliteId::Text("sv-01".to_string()));
        assert_eq!(records[1].id.to_string(), "sv-01");
    }

    #[test]
    fn mission_days_counts_from_launch() {
        let record: SatelliteRecord = serde_json::from_str(
            r#"{"id": 1, "name": "Alpha", "orbit_type": "LEO",
                "status": "Active", "launch_date": "2020-01-01"}"#,
        )
        .unwrap();

        let today = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
        assert_eq!(record.mission_days(today), Some(30));
    }
}
