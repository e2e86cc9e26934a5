//! Weekly forecast handler

use axum::{Json, extract::State};
use integration_weather::ForecastEnvelope;
use tracing::{error, info, instrument};

use crate::{error::ApiError, state::AppState};

/// Fetch the week from upstream and wrap it with the site details
#[instrument(skip(state))]
pub async fn weather_forecast(
    State(state): State<AppState>,
) -> Result<Json<ForecastEnvelope>, ApiError> {
    let forecasts = state.source.fetch_week().await.map_err(|e| {
        error!(kind = e.kind(), error = %e, "Error fetching weather");
        ApiError::from(e)
    })?;

    info!(days = forecasts.len(), "Serving forecast");
    Ok(Json(ForecastEnvelope::success(
        forecasts,
        state.location.as_ref(),
        state.coordinates,
    )))
}
