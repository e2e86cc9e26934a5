//! AquaMeteo HTTP presentation layer
//!
//! Serves the weekly forecast in the shape the dashboard consumes, plus a
//! liveness endpoint.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{FORECAST_ROUTE, cors_layer, create_router};
pub use state::AppState;
