//! Application layer - Use cases and orchestration
//!
//! Port definitions plus the services that combine domain logic with the
//! outside world: the forecast cache with its offline fallback and the
//! statistics use case.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ForecastError};
pub use ports::*;
pub use services::*;
