//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `forecast`: forecast source and cache settings
//! - `data`: reading file locations
//!
//! Sources, later ones overriding earlier: built-in defaults, an optional
//! `config.toml`, then `AQUAMETEO_*` environment variables. Nested keys use
//! `__`, e.g. `AQUAMETEO_FORECAST__ACCESS_TOKEN`.

mod data;
mod forecast;
mod server;

use std::path::Path;

use domain::{Locale, Timezone};
use integration_weather::OpenMeteoConfig;
use serde::{Deserialize, Serialize};

pub use data::DataConfig;
pub use forecast::{ForecastConfig, ForecastProvider};
pub use server::ServerConfig;

use crate::telemetry::LogFormat;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "AQUAMETEO";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Forecast source and cache
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Open-Meteo upstream settings
    #[serde(default)]
    pub open_meteo: OpenMeteoConfig,

    /// Reading data files
    #[serde(default)]
    pub data: DataConfig,

    /// Language of labels and alerts
    #[serde(default)]
    pub locale: Locale,

    /// Timezone in which calendar days are evaluated
    #[serde(default)]
    pub timezone: Timezone,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            forecast: ForecastConfig::default(),
            open_meteo: OpenMeteoConfig::default(),
            data: DataConfig::default(),
            locale: Locale::default(),
            timezone: Timezone::default(),
            log_format: LogFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional `config` file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of `config.*` when given
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("log_filter", default_log_filter())?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., AQUAMETEO_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
