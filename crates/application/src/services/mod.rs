//! Application services - Use case implementations

mod fallback_forecast;
mod forecast_cache;
mod statistics_service;

pub use fallback_forecast::FallbackForecastGenerator;
pub use forecast_cache::{CachedForecast, DEFAULT_FORECAST_TTL, ForecastCache, ForecastOrigin};
pub use statistics_service::StatisticsService;
