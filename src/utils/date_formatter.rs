use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use eyre::{eyre, Result};
use serde::{Deserialize, Deserializer};

/// Accepted spellings of a record date, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parses a record date. ISO (`2024-01-31`), Brazilian (`31/01/2024`) and
/// ISO date-times (`2024-01-31T00:00:00`) are accepted.
pub fn parse_record_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Ok(date);
        }
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    Err(eyre!("unrecognized date {:?}", raw))
}

pub fn deserialize_record_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_record_date(&raw).map_err(serde::de::Error::custom)
}

/// Milliseconds since the Unix epoch at midnight UTC of `date`.
pub fn date_to_millis(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis() as f64
}

pub fn millis_to_date(millis: f64) -> Option<NaiveDate> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.floor() as i64).map(|d| d.date_naive())
}

/// Label under the horizontal axis, `dd/mm`.
pub fn format_axis_date(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}
