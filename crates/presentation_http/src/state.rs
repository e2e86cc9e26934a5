//! Application state shared across handlers

use std::sync::Arc;

use application::ports::ForecastSourcePort;
use infrastructure::ForecastSourceAdapter;
use integration_weather::{Coordinates, OpenMeteoClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Upstream forecast source
    pub source: Arc<dyn ForecastSourcePort>,
    /// Site name echoed in responses
    pub location: Arc<str>,
    /// Site coordinates echoed in responses
    pub coordinates: Coordinates,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("location", &self.location)
            .field("coordinates", &self.coordinates)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Serve forecasts straight from Open-Meteo for the client's site
    pub fn open_meteo(client: OpenMeteoClient) -> Self {
        let location = Arc::from(client.location_name());
        let coordinates = client.coordinates();
        Self {
            source: Arc::new(ForecastSourceAdapter::new(Arc::new(client))),
            location,
            coordinates,
        }
    }
}
