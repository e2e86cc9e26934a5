//! Sensor readings
//!
//! Readings are produced by the ingestion side and are read-only here.
//! Numeric fields tolerate `null` or absent values and read as zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Anything that carries the instant it was recorded at
pub trait Timestamped {
    /// When the reading was recorded
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Water usage reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterReading {
    /// When the reading was recorded
    pub timestamp: DateTime<Utc>,
    /// Litres consumed since the previous reading
    #[serde(default, deserialize_with = "null_as_zero")]
    pub water_consumed_liters: f64,
    /// Litres of rain water recovered since the previous reading
    #[serde(default, deserialize_with = "null_as_zero")]
    pub rain_recovered_liters: f64,
}

impl WaterReading {
    /// Create a new water reading
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        water_consumed_liters: f64,
        rain_recovered_liters: f64,
    ) -> Self {
        Self {
            timestamp,
            water_consumed_liters,
            rain_recovered_liters,
        }
    }
}

impl Timestamped for WaterReading {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Atmospheric reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericReading {
    /// When the reading was recorded
    pub timestamp: DateTime<Utc>,
    /// Air temperature in Celsius
    #[serde(default, deserialize_with = "null_as_zero")]
    pub temperature: f64,
}

impl AtmosphericReading {
    /// Create a new atmospheric reading
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, temperature: f64) -> Self {
        Self {
            timestamp,
            temperature,
        }
    }
}

impl Timestamped for AtmosphericReading {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
