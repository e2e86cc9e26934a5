//! Statistics use case
//!
//! Filters readings to a date window and aggregates them. The only input
//! besides the readings and the window is the injected clock, which fixes
//! the open end of a window without an end date.

use std::sync::Arc;

use domain::{
    AtmosphericReading, DateWindow, StatisticsReport, Timezone, WaterReading, aggregate,
    filter_readings,
};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{ClockPort, ReadingStorePort};

/// Service computing windowed statistics
#[derive(Debug)]
pub struct StatisticsService {
    clock: Arc<dyn ClockPort>,
    timezone: Timezone,
}

impl StatisticsService {
    /// Create a service that evaluates calendar days in `timezone`
    #[must_use]
    pub fn new(clock: Arc<dyn ClockPort>, timezone: Timezone) -> Self {
        Self { clock, timezone }
    }

    /// Timezone calendar days are evaluated in
    #[must_use]
    pub const fn timezone(&self) -> Timezone {
        self.timezone
    }

    /// The current month as an active window
    #[must_use]
    pub fn default_window(&self) -> DateWindow {
        DateWindow::current_month(self.timezone.local_date(self.clock.now()))
    }

    /// Filter both series to `window` and aggregate what is left
    #[must_use]
    pub fn summarize(
        &self,
        water: &[WaterReading],
        atmospheric: &[AtmosphericReading],
        window: &DateWindow,
    ) -> StatisticsReport {
        let now = self.clock.now();
        let water = filter_readings(water, window, now, self.timezone);
        let atmospheric = filter_readings(atmospheric, window, now, self.timezone);

        StatisticsReport {
            statistics: aggregate(&water, &atmospheric),
            water_readings: water.len(),
            atmospheric_readings: atmospheric.len(),
        }
    }

    /// Load readings from `store` and summarize them
    #[instrument(skip(self, store))]
    pub async fn summarize_from_store(
        &self,
        store: &dyn ReadingStorePort,
        window: &DateWindow,
    ) -> Result<StatisticsReport, ApplicationError> {
        let water = store.water_readings().await?;
        let atmospheric = store.atmospheric_readings().await?;
        debug!(
            water = water.len(),
            atmospheric = atmospheric.len(),
            "Loaded readings"
        );

        Ok(self.summarize(&water, &atmospheric, window))
    }
}
