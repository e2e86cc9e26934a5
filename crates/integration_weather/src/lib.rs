//! Weather forecast integration
//!
//! Two HTTP clients that produce a week of [`domain::ForecastDay`]:
//! - [`RemoteForecastClient`] calls the bearer-authenticated forecast
//!   endpoint that serves the dashboard.
//! - [`OpenMeteoClient`] calls the Open-Meteo API (<https://open-meteo.com>)
//!   directly and maps its daily arrays. No API key is needed.

pub mod client;
mod models;
pub mod open_meteo;
pub mod remote;

pub use client::{ForecastClient, WeatherError};
pub use models::{Coordinates, ForecastEnvelope};
pub use open_meteo::{OpenMeteoClient, OpenMeteoConfig};
pub use remote::{RemoteForecastClient, RemoteForecastConfig};
