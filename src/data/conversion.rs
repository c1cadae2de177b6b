use crate::core::config::WorldScale;
use crate::core::geo::{GameCoord, LatLng};
use crate::data::formats::{format_game, GeoReadout};
use crate::data::parse::{parse_geographic_coordinate, ParseError};

/// Converts between game and geographic coordinates at a fixed world scale
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Converter {
    scale: WorldScale,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(scale: WorldScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &WorldScale {
        &self.scale
    }

    pub fn to_lat_lng(&self, point: GameCoord) -> LatLng {
        LatLng::from_game(point, &self.scale)
    }

    pub fn to_game(&self, position: LatLng) -> GameCoord {
        position.to_game(&self.scale)
    }

    /// Game position → the four geographic renderings
    pub fn game_to_geo(&self, x: f64, z: f64) -> GeoReadout {
        GeoReadout::new(&self.to_lat_lng(GameCoord::new(x, z)))
    }

    /// Geographic position → `X: …, Z: …`
    pub fn geo_to_game(&self, lat: f64, lng: f64) -> String {
        format_game(&self.to_game(LatLng::new(lat, lng)))
    }

    /// Parses a latitude and a longitude and converts them in one step
    pub fn geo_text_to_game(&self, lat: &str, lng: &str) -> Result<String, ParseError> {
        let lat = parse_geographic_coordinate(lat)?;
        let lng = parse_geographic_coordinate(lng)?;
        Ok(self.geo_to_game(lat, lng))
    }
}

/// [`Converter::game_to_geo`] at the default world scale
pub fn convert_game_to_geo(x: f64, z: f64) -> GeoReadout {
    Converter::new().game_to_geo(x, z)
}

/// [`Converter::geo_to_game`] at the default world scale
pub fn convert_geo_to_game(lat: f64, lng: f64) -> String {
    Converter::new().geo_to_game(lat, lng)
}
