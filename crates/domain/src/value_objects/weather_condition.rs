//! Weather condition and icon categories

use serde::{Deserialize, Serialize};

/// Icon category shown next to a forecast day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForecastIcon {
    /// Clear sky
    Sunny,
    /// Clouds or fog
    Cloudy,
    /// Drizzle, rain, snow or showers
    Rain,
    /// Intense rain or storms
    HeavyRain,
    /// Any icon tag this version does not know about
    #[serde(other)]
    Unknown,
}

/// Coarse weather condition derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// WMO 0
    Sunny,
    /// WMO 1-3
    PartlyCloudy,
    /// WMO 4-48
    Fog,
    /// WMO 49-57
    Drizzle,
    /// WMO 58-67
    Rain,
    /// WMO 68-77
    Snow,
    /// WMO 78-82
    Showers,
    /// WMO 83-86
    HeavyRain,
    /// Every other code
    Storm,
    /// Used by the offline forecast, which has no real observation
    Variable,
}

impl WeatherCondition {
    /// Map a WMO weather code by range.
    ///
    /// Codes are bucketed by upper bound, so gaps in the WMO table fall
    /// into the next bucket up and anything above 86 (or negative) is a storm.
    #[must_use]
    pub const fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Sunny,
            1..=3 => Self::PartlyCloudy,
            4..=48 => Self::Fog,
            49..=57 => Self::Drizzle,
            58..=67 => Self::Rain,
            68..=77 => Self::Snow,
            78..=82 => Self::Showers,
            83..=86 => Self::HeavyRain,
            _ => Self::Storm,
        }
    }

    /// Icon category for this condition
    #[must_use]
    pub const fn icon(self) -> ForecastIcon {
        match self {
            Self::Sunny => ForecastIcon::Sunny,
            Self::PartlyCloudy | Self::Fog | Self::Variable => ForecastIcon::Cloudy,
            Self::Drizzle | Self::Rain | Self::Snow | Self::Showers => ForecastIcon::Rain,
            Self::HeavyRain | Self::Storm => ForecastIcon::HeavyRain,
        }
    }
}
