//! Server-assigned instants
//!
//! The bank service never sends `null` for an unset date; it sends the zero
//! instant `0001-01-01T00:00:00Z`. [`Timestamp`] keeps that convention in
//! both directions so a default value round-trips unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seconds from the Unix epoch to `0001-01-01T00:00:00Z`
const ZERO_INSTANT_SECONDS: i64 = -62_135_596_800;

/// An RFC3339 instant whose unset value is the zero instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The zero instant, `0001-01-01T00:00:00Z`
    pub fn zero() -> Self {
        Self(DateTime::from_timestamp(ZERO_INSTANT_SECONDS, 0).unwrap_or_default())
    }

    /// Parse an RFC3339 string such as `2022-06-18T15:49:58.000Z`
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        value.parse()
    }

    /// Whether this is the zero instant (i.e. never set)
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// The underlying UTC date-time
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// The calendar date of this instant in UTC
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(parsed.with_timezone(&Utc)))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
        Ok(value.map(Self).unwrap_or_default())
    }
}
