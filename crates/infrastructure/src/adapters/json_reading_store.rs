//! JSON reading store - Implements ReadingStorePort over two JSON files
//!
//! Each file holds a JSON array of readings as exported by the collector.

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::ReadingStorePort;
use async_trait::async_trait;
use domain::{AtmosphericReading, WaterReading};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::DataConfig;

/// Reading store backed by JSON files on disk
#[derive(Debug, Clone)]
pub struct JsonReadingStore {
    water_path: PathBuf,
    atmospheric_path: PathBuf,
}

impl JsonReadingStore {
    /// Create a store reading the two given files
    #[must_use]
    pub fn new(water_path: impl Into<PathBuf>, atmospheric_path: impl Into<PathBuf>) -> Self {
        Self {
            water_path: water_path.into(),
            atmospheric_path: atmospheric_path.into(),
        }
    }

    /// Create a store from the data section of the configuration
    #[must_use]
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(&config.water_path, &config.atmospheric_path)
    }

    async fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ApplicationError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ApplicationError::Ingestion(format!("Failed to read {}: {e}", path.display()))
        })?;

        let readings: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| {
            ApplicationError::Ingestion(format!("Invalid readings in {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), count = readings.len(), "Loaded readings");
        Ok(readings)
    }
}

#[async_trait]
impl ReadingStorePort for JsonReadingStore {
    #[instrument(skip(self), fields(path = %self.water_path.display()))]
    async fn water_readings(&self) -> Result<Vec<WaterReading>, ApplicationError> {
        Self::read_array(&self.water_path).await
    }

    #[instrument(skip(self), fields(path = %self.atmospheric_path.display()))]
    async fn atmospheric_readings(&self) -> Result<Vec<AtmosphericReading>, ApplicationError> {
        Self::read_array(&self.atmospheric_path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[tokio::test]
    async fn loads_both_series() {
        let water = file_with(
            r#"[
                {"timestamp": "2024-05-10T08:00:00Z", "water_consumed_liters": 10.5, "rain_recovered_liters": 2},
                {"timestamp": "2024-05-11T08:00:00Z", "water_consumed_liters": null}
            ]"#,
        );
        let atmospheric = file_with(r#"[{"timestamp": "2024-05-10T08:00:00Z", "temperature": 21.5}]"#);
        let store = JsonReadingStore::new(water.path(), atmospheric.path());

        let water = store.water_readings().await.expect("water");
        assert_eq!(water.len(), 2);
        assert!((water[0].water_consumed_liters - 10.5).abs() < f64::EPSILON);
        assert!(water[1].water_consumed_liters.abs() < f64::EPSILON);
        assert!(water[1].rain_recovered_liters.abs() < f64::EPSILON);

        let atmospheric = store.atmospheric_readings().await.expect("atmospheric");
        assert_eq!(atmospheric.len(), 1);
        assert!((atmospheric[0].temperature - 21.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn missing_file_is_ingestion_error() {
        let store = JsonReadingStore::new("/nonexistent/water.json", "/nonexistent/atm.json");
        let err = store.water_readings().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Ingestion(ref msg) if msg.contains("water.json")));
    }

    #[tokio::test]
    async fn invalid_json_is_ingestion_error() {
        let water = file_with("{not an array}");
        let store = JsonReadingStore::new(water.path(), water.path());
        let err = store.water_readings().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Ingestion(ref msg) if msg.contains("Invalid readings")));
    }

    #[test]
    fn from_config_uses_paths() {
        let store = JsonReadingStore::from_config(&DataConfig::default());
        assert_eq!(store.water_path, PathBuf::from("data/water_readings.json"));
    }
}
