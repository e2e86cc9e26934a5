//! Client for the dashboard's forecast endpoint
//!
//! `GET {base_url}/functions/v1/weather-forecast` with a bearer token. The
//! body must be `{ "success": true, "forecasts": [...] }`.

use async_trait::async_trait;
use domain::ForecastDay;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::client::{ForecastClient, WeatherError, check_status, http_client, normalize_base_url};
use crate::models::ForecastEnvelope;

/// Path of the forecast function below the base URL
pub const FORECAST_PATH: &str = "/functions/v1/weather-forecast";

/// Remote forecast endpoint configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct RemoteForecastConfig {
    /// Base URL of the functions host
    pub base_url: String,

    /// Bearer token sent with every request
    pub access_token: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

const fn default_timeout() -> u64 {
    30
}

impl std::fmt::Debug for RemoteForecastConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteForecastConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RemoteForecastConfig {
    /// Config with the default timeout
    #[must_use]
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            timeout_secs: default_timeout(),
        }
    }
}

/// HTTP client for the forecast endpoint
#[derive(Debug, Clone)]
pub struct RemoteForecastClient {
    client: Client,
    config: RemoteForecastConfig,
    url: String,
}

impl RemoteForecastClient {
    /// Create a client; both the base URL and the token are required
    pub fn new(config: RemoteForecastConfig) -> Result<Self, WeatherError> {
        if config.base_url.trim().is_empty() {
            return Err(WeatherError::Configuration(
                "base_url is required".to_string(),
            ));
        }
        if config.access_token.trim().is_empty() {
            return Err(WeatherError::Configuration(
                "access_token is required".to_string(),
            ));
        }

        let client = http_client(config.timeout_secs)?;
        let url = format!("{}{FORECAST_PATH}", normalize_base_url(&config.base_url));

        Ok(Self {
            client,
            config,
            url,
        })
    }

    /// Full endpoint URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn unwrap_envelope(envelope: ForecastEnvelope) -> Result<Vec<ForecastDay>, WeatherError> {
        if !envelope.success {
            return Err(WeatherError::InvalidPayload(
                "success flag is false".to_string(),
            ));
        }
        match envelope.forecasts {
            Some(days) if !days.is_empty() => Ok(days),
            Some(_) => Err(WeatherError::InvalidPayload(
                "forecasts is empty".to_string(),
            )),
            None => Err(WeatherError::InvalidPayload(
                "forecasts field missing".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ForecastClient for RemoteForecastClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn week_forecast(&self) -> Result<Vec<ForecastDay>, WeatherError> {
        let response = self
            .client
            .get(&self.url)
            .bearer_auth(&self.config.access_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        check_status(response.status())?;

        let envelope: ForecastEnvelope = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let days = Self::unwrap_envelope(envelope)?;
        debug!(days = days.len(), "Received remote forecast");
        Ok(days)
    }

    fn provider(&self) -> &'static str {
        "remote"
    }
}
