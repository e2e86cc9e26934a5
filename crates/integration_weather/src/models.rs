//! Wire types

use domain::ForecastDay;
use serde::{Deserialize, Serialize};

/// Coordinates as sent on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Success body of the forecast endpoint
///
/// Every field is optional on input so that a partial body is reported as
/// an invalid payload instead of a decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub forecasts: Option<Vec<ForecastDay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl ForecastEnvelope {
    /// Successful response carrying `forecasts`
    #[must_use]
    pub fn success(
        forecasts: Vec<ForecastDay>,
        location: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            success: true,
            forecasts: Some(forecasts),
            location: Some(location.into()),
            coordinates: Some(coordinates),
        }
    }
}

/// Open-Meteo forecast response, daily section only
#[derive(Debug, Deserialize)]
pub(crate) struct OpenMeteoResponse {
    pub daily: Option<DailyData>,
}

/// Parallel arrays indexed by day
#[derive(Debug, Deserialize)]
pub(crate) struct DailyData {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Option<Vec<Option<f64>>>,
    pub weathercode: Vec<Option<i32>>,
}
