//! HTTP routes configuration

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, state::AppState};

/// Path the dashboard calls for the weekly forecast
pub const FORECAST_ROUTE: &str = "/functions/v1/weather-forecast";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            FORECAST_ROUTE,
            get(handlers::forecast::weather_forecast).post(handlers::forecast::weather_forecast),
        )
        .with_state(state)
}

/// Permissive CORS: any origin, the headers browser clients send
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}
