//! Shared client plumbing
//!
//! Error type, the client trait and the HTTP helpers both clients use.

use std::time::Duration;

use async_trait::async_trait;
use domain::ForecastDay;
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request could not be sent or got a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Body decoded but does not carry a usable forecast
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Required client configuration is missing
    #[error("Missing configuration: {0}")]
    Configuration(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl WeatherError {
    /// Whether the failure lies in the response content rather than the exchange
    #[must_use]
    pub const fn is_payload_error(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::InvalidPayload(_))
    }
}

/// A provider of the week's forecast
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch the forecast starting today, in provider order
    async fn week_forecast(&self) -> Result<Vec<ForecastDay>, WeatherError>;

    /// Short provider name for logs
    fn provider(&self) -> &'static str;
}

/// Build a reqwest client with a request timeout
pub(crate) fn http_client(timeout_secs: u64) -> Result<Client, WeatherError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))
}

/// Map a non-success status onto the error taxonomy
pub(crate) fn check_status(status: StatusCode) -> Result<(), WeatherError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(WeatherError::RateLimitExceeded);
    }
    if status.is_server_error() {
        return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
    }
    if !status.is_success() {
        return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
    }
    Ok(())
}

/// Trim a trailing slash so paths can be appended
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::NO_CONTENT).is_ok());
        assert!(matches!(
            check_status(StatusCode::TOO_MANY_REQUESTS),
            Err(WeatherError::RateLimitExceeded)
        ));
        assert!(matches!(
            check_status(StatusCode::BAD_GATEWAY),
            Err(WeatherError::ServiceUnavailable(_))
        ));
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED),
            Err(WeatherError::RequestFailed(msg)) if msg.contains("401")
        ));
    }

    #[test]
    fn payload_errors() {
        assert!(WeatherError::ParseError("eof".into()).is_payload_error());
        assert!(WeatherError::InvalidPayload("success=false".into()).is_payload_error());
        assert!(!WeatherError::RateLimitExceeded.is_payload_error());
        assert!(!WeatherError::RequestFailed("HTTP 404".into()).is_payload_error());
    }

    #[test]
    fn base_url_normalization() {
        assert_eq!(normalize_base_url("https://x.io/"), "https://x.io");
        assert_eq!(normalize_base_url("https://x.io"), "https://x.io");
    }

    #[test]
    fn error_display() {
        let err = WeatherError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert_eq!(
            WeatherError::Configuration("access_token is required".into()).to_string(),
            "Missing configuration: access_token is required"
        );
    }

    #[test]
    fn client_builds() {
        assert!(http_client(5).is_ok());
    }
}
