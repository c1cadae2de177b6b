use crate::core::config::WorldScale;
use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks whether the coordinates fall inside the nominal ±90°/±180° ranges.
    ///
    /// The transforms never call this; out-of-range values convert like any other.
    pub fn is_valid(&self) -> bool {
        self.lat >= -MAX_LATITUDE
            && self.lat <= MAX_LATITUDE
            && self.lng >= -MAX_LONGITUDE
            && self.lng <= MAX_LONGITUDE
    }

    /// Projects a game position onto latitude/longitude.
    ///
    /// Game Z grows southwards, so it is negated to get latitude.
    pub fn from_game(point: GameCoord, scale: &WorldScale) -> Self {
        let lat = -point.z * MAX_LATITUDE / scale.half_height;
        let lng = point.x * MAX_LONGITUDE / scale.half_width;
        Self::new(lat, lng)
    }

    /// Projects this coordinate back into game units
    pub fn to_game(&self, scale: &WorldScale) -> GameCoord {
        let x = self.lng * scale.half_width / MAX_LONGITUDE;
        let z = -self.lat * scale.half_height / MAX_LATITUDE;
        GameCoord::new(x, z)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a position on the game's horizontal plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameCoord {
    pub x: f64,
    pub z: f64,
}

impl GameCoord {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

impl Default for GameCoord {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
