//! Relative humidity of a forecast day

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Humidity above 100%
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid humidity: {0}% is out of range (must be 0-100)")]
pub struct InvalidHumidity(u8);

/// Relative humidity in whole percent, 0 to 100
///
/// Serialized as a bare number. Remote payloads outside the range are
/// rejected on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Humidity(u8);

impl Humidity {
    /// Reported for every Open-Meteo day, which carries no humidity
    pub const PLACEHOLDER: Self = Self(65);

    const CEILING: u8 = 100;

    /// # Errors
    ///
    /// Returns `InvalidHumidity` above 100.
    pub const fn new(percent: u8) -> Result<Self, InvalidHumidity> {
        if percent <= Self::CEILING {
            Ok(Self(percent))
        } else {
            Err(InvalidHumidity(percent))
        }
    }

    /// Saturate at 100 instead of failing
    #[must_use]
    pub const fn clamped(percent: u8) -> Self {
        match Self::new(percent) {
            Ok(h) => h,
            Err(_) => Self(Self::CEILING),
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for Humidity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::new(u8::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range() {
        assert_eq!(Humidity::new(0).map(Humidity::value), Ok(0));
        assert_eq!(Humidity::new(100).map(Humidity::value), Ok(100));
        assert_eq!(
            Humidity::new(101).unwrap_err().to_string(),
            "invalid humidity: 101% is out of range (must be 0-100)"
        );
    }

    #[test]
    fn clamping() {
        assert_eq!(Humidity::clamped(74).value(), 74);
        assert_eq!(Humidity::clamped(u8::MAX).value(), 100);
    }

    #[test]
    fn placeholder() {
        assert_eq!(Humidity::PLACEHOLDER.value(), 65);
        assert_eq!(Humidity::PLACEHOLDER.to_string(), "65%");
    }

    #[test]
    fn json_is_a_bare_number() {
        assert_eq!(serde_json::to_string(&Humidity::PLACEHOLDER).unwrap(), "65");
        let h: Humidity = serde_json::from_str("70").unwrap();
        assert_eq!(h.value(), 70);
        assert!(serde_json::from_str::<Humidity>("101").is_err());
        assert!(serde_json::from_str::<Humidity>("-3").is_err());
    }
}
