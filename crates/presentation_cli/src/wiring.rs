//! Build services from configuration

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{
    ClockPort, FallbackForecastGenerator, ForecastCache, ForecastSourcePort, StatisticsService,
};
use infrastructure::{AppConfig, ForecastSourceAdapter, JsonReadingStore};
use tracing::debug;

/// Forecast cache over the configured source and offline generator
pub fn forecast_cache(
    config: &AppConfig,
    clock: Arc<dyn ClockPort>,
) -> anyhow::Result<ForecastCache> {
    let source = ForecastSourceAdapter::from_config(&config.forecast, &config.open_meteo)
        .context("Failed to build forecast source")?
        .map(|adapter| {
            debug!(provider = adapter.provider(), "Forecast source ready");
            Arc::new(adapter) as Arc<dyn ForecastSourcePort>
        });

    let fallback = match config.forecast.fallback_seed {
        Some(seed) => FallbackForecastGenerator::from_seed(seed, config.locale, config.timezone),
        None => FallbackForecastGenerator::new(config.locale, config.timezone),
    };

    Ok(ForecastCache::new(source, clock, fallback).with_ttl(config.forecast.cache_ttl()))
}

/// Reading store, with command-line paths taking precedence over config
pub fn reading_store(
    config: &AppConfig,
    water: Option<PathBuf>,
    atmospheric: Option<PathBuf>,
) -> JsonReadingStore {
    JsonReadingStore::new(
        water.unwrap_or_else(|| config.data.water_path.clone()),
        atmospheric.unwrap_or_else(|| config.data.atmospheric_path.clone()),
    )
}

pub fn statistics_service(config: &AppConfig, clock: Arc<dyn ClockPort>) -> StatisticsService {
    StatisticsService::new(clock, config.timezone)
}
