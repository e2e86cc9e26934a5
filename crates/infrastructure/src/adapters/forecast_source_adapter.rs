//! Forecast source adapter - Implements ForecastSourcePort using integration_weather

use std::sync::Arc;

use application::error::ForecastError;
use application::ports::ForecastSourcePort;
use async_trait::async_trait;
use domain::ForecastDay;
use integration_weather::{
    ForecastClient, OpenMeteoClient, OpenMeteoConfig, RemoteForecastClient, WeatherError,
};
use tracing::{debug, info, instrument};

use crate::config::{ForecastConfig, ForecastProvider};

/// Adapter exposing a weather client as the application's forecast source
#[derive(Clone)]
pub struct ForecastSourceAdapter {
    client: Arc<dyn ForecastClient>,
}

impl std::fmt::Debug for ForecastSourceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastSourceAdapter")
            .field("provider", &self.client.provider())
            .finish()
    }
}

impl ForecastSourceAdapter {
    /// Wrap an existing client
    #[must_use]
    pub fn new(client: Arc<dyn ForecastClient>) -> Self {
        Self { client }
    }

    /// Build the source selected by configuration
    ///
    /// Returns `Ok(None)` when the remote provider is selected but its
    /// endpoint or token is missing, so the cache can serve the offline
    /// forecast without attempting a call.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured client cannot be constructed.
    pub fn from_config(
        forecast: &ForecastConfig,
        open_meteo: &OpenMeteoConfig,
    ) -> Result<Option<Self>, WeatherError> {
        match forecast.provider {
            ForecastProvider::Remote => {
                let Some(remote) = forecast.remote_client_config() else {
                    info!("Forecast endpoint not configured, offline forecast only");
                    return Ok(None);
                };
                let client = RemoteForecastClient::new(remote)?;
                Ok(Some(Self::new(Arc::new(client))))
            },
            ForecastProvider::OpenMeteo => {
                let config = OpenMeteoConfig {
                    timeout_secs: forecast.timeout_secs,
                    ..open_meteo.clone()
                };
                let client = OpenMeteoClient::new(config)?;
                Ok(Some(Self::new(Arc::new(client))))
            },
        }
    }

    /// Provider name of the wrapped client
    #[must_use]
    pub fn provider(&self) -> &'static str {
        self.client.provider()
    }

    /// Map integration weather error to forecast error
    fn map_error(err: WeatherError) -> ForecastError {
        match err {
            WeatherError::ParseError(e) | WeatherError::InvalidPayload(e) => {
                ForecastError::MalformedPayload(e)
            },
            WeatherError::Configuration(_) => ForecastError::ConfigMissing,
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ForecastError::TransportFailure(e),
            WeatherError::RateLimitExceeded => {
                ForecastError::TransportFailure("rate limit exceeded".into())
            },
            WeatherError::InvalidCoordinates => {
                ForecastError::TransportFailure("invalid coordinates".into())
            },
        }
    }
}

#[async_trait]
impl ForecastSourcePort for ForecastSourceAdapter {
    #[instrument(skip(self), fields(provider = self.client.provider()))]
    async fn fetch_week(&self) -> Result<Vec<ForecastDay>, ForecastError> {
        let days = self.client.week_forecast().await.map_err(Self::map_error)?;
        debug!(days = days.len(), "Forecast source returned");
        Ok(days)
    }
}
