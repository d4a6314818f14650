//! Codec configuration.

use crate::error::{GeoHashError, Result};
use crate::geohash::MAX_CHARACTER_PRECISION;
use serde::{Deserialize, Serialize};

/// How the codec treats coordinates outside ±90° latitude / ±180° longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatePolicy {
    /// Log a warning and bisect the value anyway.
    #[default]
    Lenient,
    /// Reject the coordinate with [`GeoHashError::CoordinateOutOfRange`].
    Strict,
}

/// Settings for [`crate::GeoHashCodec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Characters used by `encode_default` and `bounding_box_hashes`.
    #[serde(default = "CodecConfig::default_precision")]
    pub default_precision: usize,

    #[serde(default)]
    pub coordinate_policy: CoordinatePolicy,
}

impl CodecConfig {
    const fn default_precision() -> usize {
        MAX_CHARACTER_PRECISION
    }

    /// # Panics
    ///
    /// Panics if `precision` is not in `1..=12`.
    pub fn with_default_precision(mut self, precision: usize) -> Self {
        assert!(
            (1..=MAX_CHARACTER_PRECISION).contains(&precision),
            "Default precision must be between 1 and 12"
        );
        self.default_precision = precision;
        self
    }

    pub fn with_coordinate_policy(mut self, policy: CoordinatePolicy) -> Self {
        self.coordinate_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CHARACTER_PRECISION).contains(&self.default_precision) {
            log::debug!(
                "Rejecting codec config with default precision {}",
                self.default_precision
            );
            return Err(GeoHashError::Config(format!(
                "Default precision must be between 1 and {}, got: {}",
                MAX_CHARACTER_PRECISION, self.default_precision
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: CodecConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_precision: Self::default_precision(),
            coordinate_policy: CoordinatePolicy::default(),
        }
    }
}
