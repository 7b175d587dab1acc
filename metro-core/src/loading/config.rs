use std::path::Path;

use serde::{Deserialize, Serialize};

use super::network_builder::DuplicatePolicy;
use crate::Error;
use crate::predict::PredictorConfig;

/// Settings for building a metro model
///
/// Every field has a default, so a TOML document only needs to name the
/// values it overrides:
///
/// ```toml
/// trip_count = 2000
///
/// [predictor.forest]
/// n_trees = 50
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetroModelConfig {
    /// Number of synthetic trips drawn to train the predictor
    pub trip_count: usize,
    /// Seed of the trip generator
    pub seed: u64,
    pub duplicate_policy: DuplicatePolicy,
    pub predictor: PredictorConfig,
}

impl Default for MetroModelConfig {
    fn default() -> Self {
        Self {
            trip_count: 5000,
            seed: 42,
            duplicate_policy: DuplicatePolicy::default(),
            predictor: PredictorConfig::default(),
        }
    }
}

impl MetroModelConfig {
    /// Parses and validates a TOML configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` for malformed TOML and
    /// `Error::InvalidData` for out of range values
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML configuration file
    ///
    /// # Errors
    ///
    /// Same as [`MetroModelConfig::from_toml_str`], plus I/O errors
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read config '{}': {}", path.display(), e),
            )
        })?;
        Self::from_toml_str(&source)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.trip_count == 0 {
            return Err(Error::InvalidData(
                "trip_count must be greater than zero".to_string(),
            ));
        }
        self.predictor.validate()
    }
}
