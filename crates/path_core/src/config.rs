//! Sampling configuration
//!
//! Defaults are the values the extractor has always used; a JSON or YAML
//! file may override any of them.
//!
//! ```rust
//! use path_core::config::SamplerConfig;
//!
//! let config = SamplerConfig::default();
//! assert_eq!(config.min_tick_spacing, 8);
//! ```

use crate::coords::CELL_SIZE;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Replay ticks per second
pub const TICKRATE: f32 = 30.0;

/// Sampling window after the first armed tick (21.5 minutes)
pub const MAX_DURATION_SECS: f32 = 21.5 * 60.0;

/// Minimum tick gap between two accepted samples
pub const MIN_TICK_SPACING: u32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Ticks per second (default: 30)
    pub tickrate: f32,
    /// Samples stop once relative time exceeds this (default: 1290)
    pub max_duration_secs: f32,
    /// Ticks between accepted samples (default: 8)
    pub min_tick_spacing: u32,
    /// World units per grid cell (default: 128)
    pub cell_size: f32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            tickrate: TICKRATE,
            max_duration_secs: MAX_DURATION_SECS,
            min_tick_spacing: MIN_TICK_SPACING,
            cell_size: CELL_SIZE,
        }
    }
}

impl SamplerConfig {
    /// Load from a `.yaml`/`.yml` or JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SamplerConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SamplerConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tickrate.is_finite() && self.tickrate > 0.0) {
            return Err(ConfigError::Validation(format!(
                "tickrate must be positive, got {}",
                self.tickrate
            )));
        }
        if !(self.max_duration_secs.is_finite() && self.max_duration_secs >= 0.0) {
            return Err(ConfigError::Validation(format!(
                "max_duration_secs must be >= 0, got {}",
                self.max_duration_secs
            )));
        }
        if self.min_tick_spacing == 0 {
            return Err(ConfigError::Validation("min_tick_spacing must be >= 1".to_string()));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::Validation(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }

    /// Upper bound on samples one run can accept, saturating at `usize::MAX`
    pub fn max_samples(&self) -> usize {
        let ticks = (f64::from(self.max_duration_secs) * f64::from(self.tickrate)).ceil();
        let spaced = ticks / f64::from(self.min_tick_spacing.max(1));
        // float -> int casts saturate
        (spaced as usize).saturating_add(1)
    }
}
