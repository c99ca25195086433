/*
[INPUT]:  Beebotte read parameters and serde requirements
[OUTPUT]: Typed read source and time range enums with string forms
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the platform adds read sources or time range keywords
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::http::BeebotteError;

/// Where a read takes its records from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadSource {
    /// Raw records
    #[serde(rename = "live")]
    Live,
    #[serde(rename = "hour-stats")]
    HourStats,
    #[serde(rename = "day-stats")]
    DayStats,
}

impl ReadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadSource::Live => "live",
            ReadSource::HourStats => "hour-stats",
            ReadSource::DayStats => "day-stats",
        }
    }
}

impl fmt::Display for ReadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadSource {
    type Err = BeebotteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(ReadSource::Live),
            "hour-stats" => Ok(ReadSource::HourStats),
            "day-stats" => Ok(ReadSource::DayStats),
            other => Err(BeebotteError::InvalidArgument(format!(
                "unknown read source: {other}"
            ))),
        }
    }
}

/// Time window of a read
///
/// Relative windows render as `{n}hour`, `{n}day`, `{n}week`, `{n}month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Hours(u32),
    Days(u32),
    Weeks(u32),
    Months(u32),
    Today,
    Yesterday,
    CurrentWeek,
    LastWeek,
    CurrentMonth,
    LastMonth,
    YearToDate,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Hours(n) => write!(f, "{n}hour"),
            TimeRange::Days(n) => write!(f, "{n}day"),
            TimeRange::Weeks(n) => write!(f, "{n}week"),
            TimeRange::Months(n) => write!(f, "{n}month"),
            TimeRange::Today => f.write_str("today"),
            TimeRange::Yesterday => f.write_str("yesterday"),
            TimeRange::CurrentWeek => f.write_str("current-week"),
            TimeRange::LastWeek => f.write_str("last-week"),
            TimeRange::CurrentMonth => f.write_str("current-month"),
            TimeRange::LastMonth => f.write_str("last-month"),
            TimeRange::YearToDate => f.write_str("ytd"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = BeebotteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => return Ok(TimeRange::Today),
            "yesterday" => return Ok(TimeRange::Yesterday),
            "current-week" => return Ok(TimeRange::CurrentWeek),
            "last-week" => return Ok(TimeRange::LastWeek),
            "current-month" => return Ok(TimeRange::CurrentMonth),
            "last-month" => return Ok(TimeRange::LastMonth),
            "ytd" => return Ok(TimeRange::YearToDate),
            _ => {}
        }

        let invalid = || BeebotteError::InvalidArgument(format!("invalid time range: {s}"));
        let split = s.find(|c: char| !c.is_ascii_digit()).ok_or_else(invalid)?;
        let (count, unit) = s.split_at(split);
        let count: u32 = count.parse().map_err(|_| invalid())?;
        if count == 0 {
            return Err(invalid());
        }

        match unit {
            "hour" => Ok(TimeRange::Hours(count)),
            "day" => Ok(TimeRange::Days(count)),
            "week" => Ok(TimeRange::Weeks(count)),
            "month" => Ok(TimeRange::Months(count)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
