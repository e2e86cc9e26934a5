//! Domain layer for AquaMeteo
//!
//! Contains the readings and forecast types together with the pure decision
//! logic over them: date-window filtering, statistical aggregation and rain
//! alert thresholds. Nothing in here performs I/O or reads the wall clock.

pub mod date_range;
pub mod entities;
pub mod errors;
pub mod rain_alert;
pub mod statistics;
pub mod value_objects;

pub use date_range::{DateWindow, filter_readings};
pub use entities::*;
pub use errors::DomainError;
pub use rain_alert::{has_rain_soon, rain_alerts};
pub use statistics::{Statistics, StatisticsReport, aggregate};
pub use value_objects::*;
