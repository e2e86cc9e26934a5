//! Rain probability value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a probability is above 100%
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid rain probability: {0}% is out of range (must be 0-100)")]
pub struct InvalidRainProbability(u8);

/// Probability of precipitation for a day, in percent (0-100)
///
/// Alert thresholds compare against this value with `>=`, so a day at
/// exactly the threshold counts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub struct RainProbability(u8);

impl RainProbability {
    /// Maximum valid probability
    pub const MAX: u8 = 100;

    /// Create a new validated probability
    ///
    /// # Errors
    ///
    /// Returns `InvalidRainProbability` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, InvalidRainProbability> {
        if value > Self::MAX {
            Err(InvalidRainProbability(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a probability, clamping to the valid range
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Build from an upstream floating-point percentage
    ///
    /// Missing or non-finite values become 0, the rest are rounded and clamped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_percent(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Self::clamped(v.round().clamp(0.0, 255.0) as u8),
            _ => Self(0),
        }
    }

    /// Get the probability as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether the probability meets or exceeds `threshold`
    #[must_use]
    pub const fn at_least(self, threshold: u8) -> bool {
        self.0 >= threshold
    }
}

impl fmt::Display for RainProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<RainProbability> for u8 {
    fn from(p: RainProbability) -> Self {
        p.0
    }
}

impl<'de> Deserialize<'de> for RainProbability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
