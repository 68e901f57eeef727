// src/config/mod.rs
//! Harness configuration
//! Handles TOML parsing and validation

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Element count used when no length is given on the command line
pub const DEFAULT_LEN: usize = 800_000;

/// Work-items per work-group for every kernel launch
pub const DEFAULT_WORK_GROUP_SIZE: usize = 80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    pub sample: SampleConfig,
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    pub len: usize,
    pub low: f32,
    pub high: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub work_group_size: usize,
    /// Worker threads for the default queue, 0 lets rayon decide
    pub threads: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sample: SampleConfig {
                len: DEFAULT_LEN,
                low: 0.0,
                high: 10.0,
            },
            dispatch: DispatchConfig {
                work_group_size: DEFAULT_WORK_GROUP_SIZE,
                threads: 0,
            },
        }
    }
}

impl HarnessConfig {
    /// Default configuration with a different element count
    pub fn with_len(len: usize) -> Self {
        let mut config = Self::default();
        config.sample.len = len;
        config
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;

        let config: HarnessConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatch.work_group_size == 0 {
            return Err(ConfigError::Validation("Work-group size must be > 0".to_string()));
        }

        let SampleConfig { low, high, .. } = self.sample;
        if !low.is_finite() || !high.is_finite() {
            return Err(ConfigError::Validation(
                format!("Sample range must be finite, got [{}, {})", low, high)
            ));
        }

        if low >= high {
            return Err(ConfigError::Validation(
                format!("Sample range is empty: [{}, {})", low, high)
            ));
        }

        Ok(())
    }

    /// Total bytes held by the sample and result arrays
    pub fn data_volume(&self) -> usize {
        crate::report::total_data_volume(self.sample.len)
    }

    /// Export configuration to TOML string
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml_str = self.to_toml_string()?;
        std::fs::write(path.as_ref(), toml_str)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
