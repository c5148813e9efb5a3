//! Lot configuration
//!
//! A lot is described by its floors (row-major grids of cell codes), the
//! vehicle types it tracks counters for, and the strategy used when a caller
//! does not pick one. YAML and JSON are both accepted:
//!
//! ```yaml
//! name: downtown
//! vehicle_types: [2, 4]
//! default_strategy: most_free_spots
//! floors:
//!   - [[2, 2, 0], [4, 4, 4]]
//!   - [[4, 0, 4]]
//! ```

use lot_core::{FloorLayout, LayoutError, VehicleType};
use lot_strategy::AllocationStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("CONFIG/io: {0}")]
    Io(#[from] std::io::Error),

    #[error("CONFIG/yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CONFIG/json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    /// Display name, used in logs and stats
    #[serde(default = "default_name")]
    pub name: String,

    /// Vehicle types with free counters on every floor
    #[serde(default = "default_vehicle_types")]
    pub vehicle_types: Vec<VehicleType>,

    /// Floor layouts, lowest index first
    pub floors: Vec<FloorLayout>,

    /// Strategy used by `park_default`
    #[serde(default)]
    pub default_strategy: AllocationStrategy,
}

fn default_name() -> String {
    "parking-lot".to_string()
}

fn default_vehicle_types() -> Vec<VehicleType> {
    VehicleType::ALL.to_vec()
}

impl LotConfig {
    /// Config tracking every vehicle type, with the default strategy
    pub fn new(floors: Vec<FloorLayout>) -> Self {
        Self {
            name: default_name(),
            vehicle_types: default_vehicle_types(),
            floors,
            default_strategy: AllocationStrategy::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_vehicle_types(mut self, vehicle_types: Vec<VehicleType>) -> Self {
        self.vehicle_types = vehicle_types;
        self
    }

    pub fn with_default_strategy(mut self, strategy: AllocationStrategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }
}
