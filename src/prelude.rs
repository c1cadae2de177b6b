//! Prelude module for common geomc types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use geomc::prelude::*;`

pub use crate::core::{
    config::WorldScale,
    constants::{WORLD_HALF_HEIGHT, WORLD_HALF_WIDTH},
    geo::{GameCoord, LatLng},
};

pub use crate::data::{
    conversion::{convert_game_to_geo, convert_geo_to_game, Converter},
    formats::{format_game, Dms, GeoNotation, GeoReadout, Hemisphere},
    parse::{parse_game_component, parse_geographic_coordinate, ParseError},
};

pub use crate::ui::form::{FieldTone, FormOutcome, GameInput, GeoInput};

#[cfg(feature = "egui")]
pub use crate::ui::{
    panel::{ConverterPanel, UiConverterExt},
    style::ConverterStyle,
};

pub use crate::{GeoError, Result};
