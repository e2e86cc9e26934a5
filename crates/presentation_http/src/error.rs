//! API error handling

use application::ForecastError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the forecast route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Fixed summary
    pub error: String,
    /// Underlying cause
    pub details: String,
}

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream forecast could not be obtained
    #[error("Failed to fetch weather data: {0}")]
    Upstream(#[from] ForecastError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Failed to fetch weather data".to_string(),
                    details: e.to_string(),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
