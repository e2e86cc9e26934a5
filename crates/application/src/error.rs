//! Application-level errors

use thiserror::Error;

/// Why a forecast could not be obtained from the remote source
///
/// The forecast cache never surfaces these to its callers; they decide
/// whether the offline forecast is served and are logged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForecastError {
    /// Endpoint or access token not configured
    #[error("Forecast source is not configured")]
    ConfigMissing,

    /// Network failure or non-success HTTP status
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Response body did not carry a usable forecast
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl ForecastError {
    /// Short, stable name for log fields
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ConfigMissing => "config_missing",
            Self::TransportFailure(_) => "transport_failure",
            Self::MalformedPayload(_) => "malformed_payload",
        }
    }
}

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Forecast retrieval error
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    /// Readings could not be loaded from the data store
    #[error("Ingestion error: {0}")]
    Ingestion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_error_kinds() {
        assert_eq!(ForecastError::ConfigMissing.kind(), "config_missing");
        assert_eq!(
            ForecastError::TransportFailure("HTTP 503".into()).kind(),
            "transport_failure"
        );
        assert_eq!(
            ForecastError::MalformedPayload("no forecasts".into()).kind(),
            "malformed_payload"
        );
    }

    #[test]
    fn forecast_error_messages() {
        assert_eq!(
            ForecastError::TransportFailure("HTTP 500".into()).to_string(),
            "Transport failure: HTTP 500"
        );
        assert_eq!(
            ForecastError::ConfigMissing.to_string(),
            "Forecast source is not configured"
        );
    }

    #[test]
    fn application_error_wraps_forecast_error_transparently() {
        let err: ApplicationError = ForecastError::MalformedPayload("empty".into()).into();
        assert_eq!(err.to_string(), "Malformed payload: empty");
    }
}
