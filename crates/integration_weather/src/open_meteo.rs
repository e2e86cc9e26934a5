//! Open-Meteo daily forecast client
//!
//! Requests seven days of maxima, minima, precipitation probability and
//! WMO weather code for one location, and turns the parallel arrays into
//! forecast days.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{
    FORECAST_DAYS, ForecastDay, GeoLocation, Humidity, Locale, RainProbability, WeatherCondition,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::client::{ForecastClient, WeatherError, check_status, http_client, normalize_base_url};
use crate::models::{Coordinates, DailyData, OpenMeteoResponse};

/// Daily variables requested from the API
const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_probability_max,weathercode";

/// Open-Meteo client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Latitude of the forecast site
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Longitude of the forecast site
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Human-readable site name
    #[serde(default = "default_location_name")]
    pub location_name: String,

    /// Language of the day and condition labels
    #[serde(default)]
    pub locale: Locale,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_latitude() -> f64 {
    GeoLocation::ANTANANARIVO.latitude()
}

const fn default_longitude() -> f64 {
    GeoLocation::ANTANANARIVO.longitude()
}

fn default_location_name() -> String {
    "Antananarivo, Madagascar".to_string()
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            location_name: default_location_name(),
            locale: Locale::default(),
        }
    }
}

/// Open-Meteo HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: OpenMeteoConfig,
    location: GeoLocation,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range or the HTTP
    /// client cannot be initialized.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, WeatherError> {
        let location = GeoLocation::new(config.latitude, config.longitude)
            .map_err(|_| WeatherError::InvalidCoordinates)?;
        let client = http_client(config.timeout_secs)?;

        Ok(Self {
            client,
            config,
            location,
        })
    }

    /// Create a new client with default configuration
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(OpenMeteoConfig::default())
    }

    /// Site the forecast is produced for
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Site name
    #[must_use]
    pub fn location_name(&self) -> &str {
        &self.config.location_name
    }

    /// Coordinates in wire form
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.location.latitude(),
            longitude: self.location.longitude(),
        }
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", normalize_base_url(&self.config.base_url))
    }

    /// Map the parallel daily arrays to forecast days
    ///
    /// Missing temperatures read as 0, a missing precipitation probability
    /// as 0 and a missing weather code as the catch-all storm category.
    fn parse_daily(daily: &DailyData, locale: Locale) -> Result<Vec<ForecastDay>, WeatherError> {
        let len = daily.time.len();
        let probabilities = daily.precipitation_probability_max.as_deref();

        let mismatched = daily.temperature_2m_max.len() != len
            || daily.temperature_2m_min.len() != len
            || daily.weathercode.len() != len
            || probabilities.is_some_and(|p| p.len() != len);
        if mismatched {
            return Err(WeatherError::ParseError(format!(
                "daily arrays differ in length from time ({len})"
            )));
        }

        daily
            .time
            .iter()
            .enumerate()
            .map(|(i, raw_date)| {
                let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
                    .map_err(|e| WeatherError::ParseError(format!("Invalid date {raw_date}: {e}")))?;
                let condition =
                    WeatherCondition::from_wmo_code(daily.weathercode[i].unwrap_or(-1));
                let rain = probabilities.and_then(|p| p[i]);

                Ok(ForecastDay::new(
                    date,
                    locale,
                    condition,
                    round_half_up(daily.temperature_2m_max[i].unwrap_or_default()),
                    round_half_up(daily.temperature_2m_min[i].unwrap_or_default()),
                    Humidity::PLACEHOLDER,
                    RainProbability::from_percent(rain),
                ))
            })
            .collect()
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[async_trait]
impl ForecastClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %self.location.latitude(), lon = %self.location.longitude()))]
    async fn week_forecast(&self) -> Result<Vec<ForecastDay>, WeatherError> {
        let url = self.forecast_url();
        debug!(url = %url, "Fetching daily forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", self.location.latitude().to_string()),
                ("longitude", self.location.longitude().to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        check_status(response.status())?;

        let api_response: OpenMeteoResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let daily = api_response.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily forecast data in response".to_string())
        })?;

        Self::parse_daily(&daily, self.config.locale)
    }

    fn provider(&self) -> &'static str {
        "open-meteo"
    }
}
