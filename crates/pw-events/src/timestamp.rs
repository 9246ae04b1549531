//! Activity timestamps: RFC 3339, or the dashboard's `YYYY-MM-DD HH:MM:SS`
//! read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised timestamp {value:?}: expected RFC 3339 or \"YYYY-MM-DD HH:MM:SS\"")]
pub struct TimestampError {
    pub value: String,
}

pub fn parse(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, NAIVE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TimestampError {
            value: value.to_string(),
        })
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}
