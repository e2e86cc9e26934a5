//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod clock_port;
mod forecast_source_port;
mod reading_store_port;

pub use clock_port::{ClockPort, ManualClock};
#[cfg(test)]
pub use forecast_source_port::MockForecastSourcePort;
pub use forecast_source_port::ForecastSourcePort;
#[cfg(test)]
pub use reading_store_port::MockReadingStorePort;
pub use reading_store_port::ReadingStorePort;
