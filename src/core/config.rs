//! World scale configuration
//!
//! The transforms are linear, so the only tunable is the size of the world in
//! game units. A scale can be built in code, taken from the defaults, or read
//! from a JSON document such as `{ "half_width": 101374, "half_height": 55295 }`.

use crate::core::constants::{WORLD_HALF_HEIGHT, WORLD_HALF_WIDTH};
use crate::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game-unit half extents of the map.
///
/// `half_width` corresponds to 180° of longitude and `half_height` to 90° of
/// latitude. Both directions of the transform read the same value, which is
/// what keeps round-trips exact up to floating point error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldScale {
    pub half_width: f64,
    pub half_height: f64,
}

impl WorldScale {
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    /// Both extents must be finite and strictly positive
    pub fn is_valid(&self) -> bool {
        [self.half_width, self.half_height]
            .iter()
            .all(|extent| extent.is_finite() && *extent > 0.0)
    }

    /// Parses a scale from JSON, filling missing fields with the defaults
    pub fn from_json(data: &str) -> Result<Self> {
        let scale: WorldScale = serde_json::from_str(data)?;
        scale.validated()
    }

    /// Reads a JSON scale file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let scale = Self::from_json(&data)?;

        #[cfg(feature = "debug")]
        log::info!(
            "Loaded world scale from {}: {} x {}",
            path.as_ref().display(),
            scale.half_width,
            scale.half_height
        );

        Ok(scale)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validated(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(GeoError::InvalidScale(format!(
                "half extents must be finite and positive, got {} x {}",
                self.half_width, self.half_height
            )))
        }
    }
}

impl Default for WorldScale {
    fn default() -> Self {
        Self::new(WORLD_HALF_WIDTH, WORLD_HALF_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        let scale = WorldScale::default();
        assert_eq!(scale.half_width, 101_374.0);
        assert_eq!(scale.half_height, 55_295.0);
        assert!(scale.is_valid());
    }

    #[test]
    fn test_scale_from_json() {
        let scale = WorldScale::from_json(r#"{ "half_width": 2048, "half_height": 1024 }"#).unwrap();
        assert_eq!(scale, WorldScale::new(2048.0, 1024.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let scale = WorldScale::from_json(r#"{ "half_height": 500 }"#).unwrap();
        assert_eq!(scale.half_width, WORLD_HALF_WIDTH);
        assert_eq!(scale.half_height, 500.0);
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let err = WorldScale::from_json(r#"{ "half_width": 0, "half_height": 10 }"#).unwrap_err();
        assert!(matches!(err, GeoError::InvalidScale(_)));

        let err = WorldScale::from_json("not json").unwrap_err();
        assert!(matches!(err, GeoError::Serialization(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let scale = WorldScale::new(30_000_000.0, 15_000_000.0);
        let json = scale.to_json().unwrap();
        assert_eq!(WorldScale::from_json(&json).unwrap(), scale);
    }

    #[test]
    fn test_load_missing_file() {
        let err = WorldScale::load("/nonexistent/geomc-scale.json").unwrap_err();
        assert!(matches!(err, GeoError::Io(_)));
    }
}
