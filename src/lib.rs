//! # GeoMC
//!
//! Conversion between a map's planar game coordinates (X, Z) and
//! latitude/longitude, written either as decimal degrees or as
//! degrees/minutes/seconds with optional hemisphere letters.
//!
//! The transforms are pure functions over a [`WorldScale`]; the [`ui`]
//! module layers input handling (and optional egui widgets) on top.

pub mod core;
pub mod data;
pub mod ui;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::WorldScale,
    geo::{GameCoord, LatLng},
};

pub use crate::data::{
    conversion::{convert_game_to_geo, convert_geo_to_game, Converter},
    formats::{Dms, GeoNotation, GeoReadout, Hemisphere},
    parse::{parse_game_component, parse_geographic_coordinate, ParseError},
};

pub use crate::ui::form::{FieldTone, FormOutcome, GameInput, GeoInput};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GeoError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[from] ParseError),

    #[error("Invalid world scale: {0}")]
    InvalidScale(String),
}

/// Error type alias for convenience
pub type Error = GeoError;
