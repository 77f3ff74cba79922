use std::fmt::Display;

use chrono::Duration;
use serde::{Deserialize, Serialize, Serializer};

const SECS_IN_MIN: i64 = 60;
const MINS_IN_HOUR: i64 = 60;

/// A generic duration type that converts from and to a integer amount of seconds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct SecondsRound(Duration);

impl SecondsRound {
    /// Create a duration of whole seconds.
    #[must_use]
    pub fn from_seconds(seconds: u32) -> Self {
        Self(Duration::seconds(i64::from(seconds)))
    }
}

impl<'de> Deserialize<'de> for SecondsRound {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let seconds: i64 = u64::deserialize(deserializer)?
            .try_into()
            .map_err(|_| D::Error::custom("duration overflow"))?;

        let duration =
            Duration::try_seconds(seconds).ok_or_else(|| D::Error::custom("duration overflow"))?;

        Ok(Self(duration))
    }
}

impl Serialize for SecondsRound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0.num_seconds())
    }
}

impl From<SecondsRound> for Duration {
    fn from(value: SecondsRound) -> Self {
        value.0
    }
}

impl Display for SecondsRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let duration = self.0;
        let seconds = duration.num_seconds() % SECS_IN_MIN;
        let minutes = (duration.num_seconds() / SECS_IN_MIN) % MINS_IN_HOUR;
        let hours = duration.num_seconds() / (SECS_IN_MIN * MINS_IN_HOUR);

        write!(f, "{hours:0>2}:{minutes:0>2}:{seconds:0>2}")
    }
}

/// A OCPI specific local date, without a time.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct OcpiDate(chrono::NaiveDate);

const DATE_FORMAT: &str = "%Y-%m-%d";

impl<'de> Deserialize<'de> for OcpiDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let s = <String as Deserialize>::deserialize(deserializer)?;
        let date = chrono::NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(D::Error::custom)?;

        Ok(Self(date))
    }
}

impl Serialize for OcpiDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

impl From<chrono::NaiveDate> for OcpiDate {
    fn from(value: chrono::NaiveDate) -> Self {
        Self(value)
    }
}

impl From<OcpiDate> for chrono::NaiveDate {
    fn from(value: OcpiDate) -> Self {
        value.0
    }
}

impl Display for OcpiDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.format(DATE_FORMAT).fmt(f)
    }
}

/// A OCPI specific local time, without a date.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct OcpiTime(chrono::NaiveTime);

const TIME_FORMAT: &str = "%H:%M";

impl<'de> Deserialize<'de> for OcpiTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let s = <String as Deserialize>::deserialize(deserializer)?;
        let time = chrono::NaiveTime::parse_from_str(&s, TIME_FORMAT).map_err(D::Error::custom)?;

        Ok(Self(time))
    }
}

impl Serialize for OcpiTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(TIME_FORMAT))
    }
}

impl From<chrono::NaiveTime> for OcpiTime {
    fn from(value: chrono::NaiveTime) -> Self {
        Self(value)
    }
}

impl From<OcpiTime> for chrono::NaiveTime {
    fn from(value: OcpiTime) -> Self {
        value.0
    }
}

impl Display for OcpiTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.format(TIME_FORMAT).fmt(f)
    }
}

/// Days of the week.
#[derive(Debug, Copy, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}
