//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod forecast_source_adapter;
mod json_reading_store;
mod system_clock;

pub use forecast_source_adapter::ForecastSourceAdapter;
pub use json_reading_store::JsonReadingStore;
pub use system_clock::SystemClock;
