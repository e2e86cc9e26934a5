//! Forecast source port
//!
//! A remote provider of the 7-day forecast. Implementations map every
//! failure onto [`ForecastError`]; the cache decides what happens next.

use async_trait::async_trait;
use domain::ForecastDay;
#[cfg(test)]
use mockall::automock;

use crate::error::ForecastError;

/// Port for fetching the weekly forecast from a remote provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastSourcePort: Send + Sync {
    /// Fetch the forecast starting today
    ///
    /// Implementations return the days as the provider sent them. Length
    /// checks happen in the cache.
    async fn fetch_week(&self) -> Result<Vec<ForecastDay>, ForecastError>;
}
