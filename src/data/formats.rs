use crate::core::constants::{DECIMAL_PRECISION, SECONDS_PRECISION};
use crate::core::geo::{GameCoord, LatLng};
use serde::{Deserialize, Serialize};

/// Hemisphere letter attached to a latitude or longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn for_latitude(lat: f64) -> Self {
        if lat < 0.0 {
            Self::South
        } else {
            Self::North
        }
    }

    pub fn for_longitude(lng: f64) -> Self {
        if lng < 0.0 {
            Self::West
        } else {
            Self::East
        }
    }

    /// Reads a suffix letter; only the uppercase forms are recognised
    pub fn from_suffix(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    pub fn suffix(&self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// South and west carry negative values
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

/// Degrees/minutes/seconds split of a decimal-degree value.
///
/// Degrees and minutes are truncated toward zero, so for values in (-1, 0)
/// the degree part is 0 and the sign only shows up on minutes and seconds.
/// Degrees and minutes are `i64`, so huge inputs are not clipped at the `i32`
/// range; `as` still saturates at the `i64` limits and maps NaN to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: i64,
    pub minutes: i64,
    pub seconds: f64,
}

impl Dms {
    pub fn from_decimal(value: f64) -> Self {
        let degrees = value as i64;
        let minutes = ((value - degrees as f64) * 60.0) as i64;
        let seconds = (value - degrees as f64 - minutes as f64 / 60.0) * 3600.0;

        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            degrees: self.degrees.saturating_abs(),
            minutes: self.minutes.saturating_abs(),
            seconds: self.seconds.abs(),
        }
    }

    /// Folds the parts back into decimal degrees
    pub fn to_decimal(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }

    fn render(&self) -> String {
        format!(
            "{}° {}' {:.prec$}\"",
            self.degrees,
            self.minutes,
            unsigned_zero(self.seconds),
            prec = SECONDS_PRECISION
        )
    }
}

/// The four ways a geographic position is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoNotation {
    Decimal,
    DecimalSuffixed,
    Sexagesimal,
    SexagesimalSuffixed,
}

impl GeoNotation {
    pub const ALL: [GeoNotation; 4] = [
        Self::Decimal,
        Self::DecimalSuffixed,
        Self::Sexagesimal,
        Self::SexagesimalSuffixed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Decimal => "Decimal",
            Self::DecimalSuffixed => "Decimal (N/S/E/W)",
            Self::Sexagesimal => "Sexagesimal",
            Self::SexagesimalSuffixed => "Sexagesimal (N/S/E/W)",
        }
    }

    pub fn format(&self, position: &LatLng) -> String {
        let LatLng { lat, lng } = *position;
        let ns = Hemisphere::for_latitude(lat).suffix();
        let ew = Hemisphere::for_longitude(lng).suffix();

        match self {
            Self::Decimal => format!("{}, {}", decimal(lat), decimal(lng)),
            Self::DecimalSuffixed => format!(
                "{} {}, {} {}",
                decimal(lat.abs()),
                ns,
                decimal(lng.abs()),
                ew
            ),
            Self::Sexagesimal => format!(
                "{}, {}",
                Dms::from_decimal(lat).render(),
                Dms::from_decimal(lng).render()
            ),
            Self::SexagesimalSuffixed => format!(
                "{} {}, {} {}",
                Dms::from_decimal(lat).abs().render(),
                ns,
                Dms::from_decimal(lng).abs().render(),
                ew
            ),
        }
    }
}

/// All four renderings of one geographic position
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeoReadout {
    pub decimal: String,
    pub decimal_suffixed: String,
    pub sexagesimal: String,
    pub sexagesimal_suffixed: String,
}

impl GeoReadout {
    pub fn new(position: &LatLng) -> Self {
        Self {
            decimal: GeoNotation::Decimal.format(position),
            decimal_suffixed: GeoNotation::DecimalSuffixed.format(position),
            sexagesimal: GeoNotation::Sexagesimal.format(position),
            sexagesimal_suffixed: GeoNotation::SexagesimalSuffixed.format(position),
        }
    }

    pub fn get(&self, notation: GeoNotation) -> &str {
        match notation {
            GeoNotation::Decimal => &self.decimal,
            GeoNotation::DecimalSuffixed => &self.decimal_suffixed,
            GeoNotation::Sexagesimal => &self.sexagesimal,
            GeoNotation::SexagesimalSuffixed => &self.sexagesimal_suffixed,
        }
    }
}

/// Formats a game position as `X: …, Z: …`
pub fn format_game(point: &GameCoord) -> String {
    format!("X: {}, Z: {}", decimal(point.x), decimal(point.z))
}

fn decimal(value: f64) -> String {
    format!("{:.prec$}", unsigned_zero(value), prec = DECIMAL_PRECISION)
}

// Negating an exact zero yields -0.0, which would otherwise print as "-0.00000".
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
