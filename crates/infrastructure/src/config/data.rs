//! Reading data files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where collected readings are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON array of water readings
    #[serde(default = "default_water_path")]
    pub water_path: PathBuf,

    /// JSON array of atmospheric readings
    #[serde(default = "default_atmospheric_path")]
    pub atmospheric_path: PathBuf,
}

fn default_water_path() -> PathBuf {
    PathBuf::from("data/water_readings.json")
}

fn default_atmospheric_path() -> PathBuf {
    PathBuf::from("data/atmospheric_readings.json")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            water_path: default_water_path(),
            atmospheric_path: default_atmospheric_path(),
        }
    }
}
