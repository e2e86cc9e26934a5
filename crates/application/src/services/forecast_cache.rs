//! Single-slot forecast cache with offline fallback
//!
//! The slot is either empty, fresh (younger than the TTL) or stale. A call
//! on an empty or stale slot goes to the remote source; any failure there
//! is logged and answered with the offline forecast, which is cached like
//! a remote one. Callers always get a full week.
//!
//! Concurrent refreshes are not coalesced: two callers hitting a stale slot
//! may both reach the source, and the later completion wins.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use domain::rain_alert::DEFAULT_HORIZON_DAYS;
use domain::{FORECAST_DAYS, ForecastDay, has_rain_soon, rain_alerts};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::ForecastError;
use crate::ports::{ClockPort, ForecastSourcePort};
use crate::services::FallbackForecastGenerator;

/// Default time-to-live of a cached forecast
pub const DEFAULT_FORECAST_TTL: Duration = Duration::from_secs(60 * 60);

fn ttl_delta(ttl: Duration) -> TimeDelta {
    TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX)
}

/// Where a cached forecast came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastOrigin {
    /// Returned by the remote source
    Remote,
    /// Synthesized offline
    Fallback,
}

/// A week of forecast together with its provenance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CachedForecast {
    /// Exactly seven days, today first
    pub days: Vec<ForecastDay>,
    /// Remote or fallback
    pub origin: ForecastOrigin,
    /// When the refresh that produced this entry completed
    pub fetched_at: DateTime<Utc>,
}

impl CachedForecast {
    /// Age of the entry at `now`
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.fetched_at
    }
}

/// Forecast cache service
pub struct ForecastCache {
    source: Option<Arc<dyn ForecastSourcePort>>,
    clock: Arc<dyn ClockPort>,
    fallback: FallbackForecastGenerator,
    ttl: TimeDelta,
    slot: RwLock<Option<CachedForecast>>,
}

impl std::fmt::Debug for ForecastCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastCache")
            .field("has_source", &self.source.is_some())
            .field("clock", &self.clock)
            .field("fallback", &self.fallback)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl ForecastCache {
    /// Create a cache with the default one hour TTL
    ///
    /// `source` is `None` when the remote endpoint is not configured; every
    /// refresh then resolves to the fallback without a network attempt.
    #[must_use]
    pub fn new(
        source: Option<Arc<dyn ForecastSourcePort>>,
        clock: Arc<dyn ClockPort>,
        fallback: FallbackForecastGenerator,
    ) -> Self {
        Self {
            source,
            clock,
            fallback,
            ttl: ttl_delta(DEFAULT_FORECAST_TTL),
            slot: RwLock::new(None),
        }
    }

    /// Override the time-to-live
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl_delta(ttl);
        self
    }

    /// Configured time-to-live
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Whether a remote source is wired in
    #[must_use]
    pub const fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Current slot content, fresh or not, without triggering a refresh
    #[must_use]
    pub fn peek(&self) -> Option<CachedForecast> {
        self.slot.read().clone()
    }

    /// Drop the cached entry so the next read refreshes
    pub fn invalidate(&self) {
        if self.slot.write().take().is_some() {
            debug!("Forecast cache invalidated");
        }
    }

    /// The week's forecast, always seven days
    pub async fn get_week_forecast(&self) -> Vec<ForecastDay> {
        self.get_cached_forecast().await.days
    }

    /// The week's forecast with its origin and fetch time
    #[instrument(skip(self))]
    pub async fn get_cached_forecast(&self) -> CachedForecast {
        if let Some(entry) = self.fresh_entry() {
            debug!(origin = ?entry.origin, fetched_at = %entry.fetched_at, "Serving cached forecast");
            return entry;
        }

        let entry = match self.fetch_remote().await {
            Ok(days) => {
                info!(days = days.len(), "Fetched remote forecast");
                CachedForecast {
                    days,
                    origin: ForecastOrigin::Remote,
                    fetched_at: self.clock.now(),
                }
            },
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Forecast source unavailable, using offline forecast");
                let now = self.clock.now();
                CachedForecast {
                    days: self.fallback.generate(now),
                    origin: ForecastOrigin::Fallback,
                    fetched_at: now,
                }
            },
        };

        self.store(entry.clone());
        entry
    }

    /// Whether rain is likely within the first `days` days
    pub async fn has_rain_forecast(&self, days: usize) -> bool {
        has_rain_soon(&self.get_week_forecast().await, days)
    }

    /// [`Self::has_rain_forecast`] over the default two-day horizon
    pub async fn has_rain_soon(&self) -> bool {
        self.has_rain_forecast(DEFAULT_HORIZON_DAYS).await
    }

    /// Rain alert messages for the cached week
    pub async fn rain_alerts(&self) -> Vec<String> {
        rain_alerts(&self.get_week_forecast().await, self.fallback.locale())
    }

    fn fresh_entry(&self) -> Option<CachedForecast> {
        let now = self.clock.now();
        self.slot
            .read()
            .as_ref()
            .filter(|entry| entry.age(now) < self.ttl)
            .cloned()
    }

    async fn fetch_remote(&self) -> Result<Vec<ForecastDay>, ForecastError> {
        let source = self.source.as_ref().ok_or(ForecastError::ConfigMissing)?;
        let days = source.fetch_week().await?;

        if days.len() != FORECAST_DAYS {
            return Err(ForecastError::MalformedPayload(format!(
                "expected {FORECAST_DAYS} days, got {}",
                days.len()
            )));
        }

        Ok(days)
    }

    fn store(&self, entry: CachedForecast) {
        let mut slot = self.slot.write();
        match slot.as_ref() {
            Some(current) if current.fetched_at > entry.fetched_at => {
                debug!(
                    current = %current.fetched_at,
                    candidate = %entry.fetched_at,
                    "Keeping newer cached forecast"
                );
            },
            _ => *slot = Some(entry),
        }
    }
}
