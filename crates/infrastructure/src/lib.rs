//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the forecast source
//! over the weather clients, the system clock and the JSON reading store.
//! Also owns configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DataConfig, ForecastConfig, ForecastProvider, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
