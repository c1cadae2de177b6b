//! World extents and the angular ranges they map onto.
//! Keeping them in a single place makes it easier to tweak the map scale.

/// Game units from the map centre to its east/west edge (±180° longitude).
pub const WORLD_HALF_WIDTH: f64 = 101_374.0;

/// Game units from the map centre to its north/south edge (±90° latitude).
pub const WORLD_HALF_HEIGHT: f64 = 55_295.0;

/// Longitude reached at `WORLD_HALF_WIDTH`.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Latitude reached at `WORLD_HALF_HEIGHT`.
pub const MAX_LATITUDE: f64 = 90.0;

/// Fraction digits used for decimal degrees and game units.
pub const DECIMAL_PRECISION: usize = 5;

/// Fraction digits used for the seconds part of sexagesimal output.
pub const SECONDS_PRECISION: usize = 2;

/// Message shown in place of any output whose input failed to parse.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input!";
