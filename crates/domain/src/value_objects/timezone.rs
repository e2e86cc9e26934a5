//! Timezone value object
//!
//! Calendar days (date-window bounds, forecast labels) are evaluated in the
//! operator's timezone rather than in UTC.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A validated IANA timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timezone(Tz);

impl Timezone {
    /// UTC timezone
    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    /// Indian/Antananarivo (EAT, UTC+3, no DST)
    #[must_use]
    pub const fn antananarivo() -> Self {
        Self(Tz::Indian__Antananarivo)
    }

    /// The IANA name, e.g. `Europe/Paris`
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Underlying `chrono-tz` zone
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.0
    }

    /// Calendar date of `instant` in this timezone
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }

    /// First instant (00:00:00.000 local) of `date`
    #[must_use]
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        self.resolve(date.and_time(NaiveTime::default()), false)
    }

    /// Last millisecond (23:59:59.999 local) of `date`
    #[must_use]
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let last_milli =
            date.and_time(NaiveTime::default()) + TimeDelta::days(1) - TimeDelta::milliseconds(1);
        self.resolve(last_milli, true)
    }

    /// Map a local wall-clock time to UTC.
    ///
    /// Ambiguous times (DST fall-back) pick the earliest or latest mapping;
    /// times inside a DST gap are shifted by the offset in force around them.
    fn resolve(&self, local: NaiveDateTime, latest: bool) -> DateTime<Utc> {
        match self.0.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(early, late) => {
                if latest {
                    late.with_timezone(&Utc)
                } else {
                    early.with_timezone(&Utc)
                }
            },
            LocalResult::None => {
                let offset = self.0.offset_from_utc_datetime(&local).fix();
                let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
                Utc.from_utc_datetime(&utc)
            },
        }
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::antananarivo()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Timezone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(s.to_string()))
    }
}

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
