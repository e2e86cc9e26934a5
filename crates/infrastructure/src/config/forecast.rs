//! Forecast source configuration.

use std::time::Duration;

use integration_weather::RemoteForecastConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Which client backs the forecast source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastProvider {
    /// Bearer-authenticated forecast endpoint
    #[default]
    Remote,
    /// Open-Meteo called directly
    OpenMeteo,
}

/// Forecast cache and source configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Source used to refresh the cache
    #[serde(default)]
    pub provider: ForecastProvider,

    /// Base URL of the forecast endpoint host
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Bearer token for the forecast endpoint (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// How long a cached forecast stays fresh, in seconds (default: 3600)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Fixed seed for the offline forecast; entropy-seeded when absent
    #[serde(default)]
    pub fallback_seed: Option<u64>,
}

const fn default_timeout() -> u64 {
    30
}

const fn default_cache_ttl() -> u64 {
    3600
}

impl std::fmt::Debug for ForecastConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastConfig")
            .field("provider", &self.provider)
            .field("endpoint", &self.endpoint)
            .field(
                "access_token",
                &if self.access_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("fallback_seed", &self.fallback_seed)
            .finish()
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            provider: ForecastProvider::default(),
            endpoint: None,
            access_token: None,
            timeout_secs: default_timeout(),
            cache_ttl_secs: default_cache_ttl(),
            fallback_seed: None,
        }
    }
}

impl ForecastConfig {
    /// Get the access token as a string reference (for API calls)
    #[must_use]
    pub fn access_token_str(&self) -> Option<&str> {
        self.access_token.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Cache time-to-live
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Remote client settings, present only when endpoint and token are both non-empty
    #[must_use]
    pub fn remote_client_config(&self) -> Option<RemoteForecastConfig> {
        let endpoint = self.endpoint.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let token = self.access_token_str().map(str::trim).filter(|s| !s.is_empty())?;

        Some(RemoteForecastConfig {
            base_url: endpoint.to_string(),
            access_token: token.to_string(),
            timeout_secs: self.timeout_secs,
        })
    }
}
