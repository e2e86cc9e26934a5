//! Reading store port
//!
//! Read access to collected sensor data. How readings get there is not
//! this crate's concern.

use async_trait::async_trait;
use domain::{AtmosphericReading, WaterReading};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for loading stored readings
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReadingStorePort: Send + Sync {
    /// All water readings, in stored order
    async fn water_readings(&self) -> Result<Vec<WaterReading>, ApplicationError>;

    /// All atmospheric readings, in stored order
    async fn atmospheric_readings(&self) -> Result<Vec<AtmosphericReading>, ApplicationError>;
}
