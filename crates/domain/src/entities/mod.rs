//! Domain entities - readings ingested from the data store and forecast days

mod forecast;
mod reading;

pub use forecast::{FORECAST_DAYS, ForecastDay};
pub use reading::{AtmosphericReading, Timestamped, WaterReading};
