//! Dead zone configuration for smooth follow.
//!
//! Thresholds are passed explicitly to the code that needs them; there is
//! no global settings object. A config can be built in code or loaded from
//! JSON, where missing fields take their defaults:
//!
//! ```json
//! { "float": 0.1, "vector": 0.5, "rotator": 1.0 }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Distances under which a follow snaps straight to its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadZoneConfig {
    /// Absolute difference for scalars.
    pub float: f32,
    /// Euclidean distance for 2D/3D vectors.
    pub vector: f32,
    /// Angle in degrees for rotations.
    pub rotator: f32,
}

impl DeadZoneConfig {
    /// A config that never snaps.
    pub const DISABLED: Self = Self {
        float: 0.0,
        vector: 0.0,
        rotator: 0.0,
    };

    /// Parse and validate a config from a JSON string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] on malformed JSON, [`ConfigError::InvalidThreshold`]
    /// if a threshold is negative or not finite.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "loaded dead zone config");
        Ok(config)
    }

    /// Parse and validate a config from a reader.
    ///
    /// # Errors
    ///
    /// See [`DeadZoneConfig::from_json_str`].
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        debug!(?config, "loaded dead zone config");
        Ok(config)
    }

    /// Check every threshold is finite and non-negative.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidThreshold`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("float", self.float),
            ("vector", self.vector),
            ("rotator", self.rotator),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { field, value });
            }
        }
        Ok(())
    }
}

impl Default for DeadZoneConfig {
    fn default() -> Self {
        Self {
            float: 0.1,
            vector: 0.5,
            rotator: 1.0,
        }
    }
}
