//! Toolkit-independent input handling for the converter window
//!
//! Each form holds the raw text of its two input fields. Evaluating a form
//! never fails: blank input clears the outputs, unparsable input produces an
//! [`FormOutcome::Invalid`], and anything else is converted.

use crate::core::constants::INVALID_INPUT_MESSAGE;
use crate::data::conversion::Converter;
use crate::data::formats::{GeoNotation, GeoReadout};
use crate::data::parse::{parse_game_component, ParseError};

/// Result of evaluating a form against its current input
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome<T> {
    /// At least one input is blank; outputs should be emptied
    Cleared,
    Ready(T),
    Invalid(ParseError),
}

/// How an output field should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldTone {
    #[default]
    Normal,
    Error,
}

impl<T> FormOutcome<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn tone(&self) -> FieldTone {
        if self.is_error() {
            FieldTone::Error
        } else {
            FieldTone::Normal
        }
    }

    /// Text for an output field, using `render` to pick it out of a ready value
    pub fn text<F>(&self, render: F) -> String
    where
        F: FnOnce(&T) -> String,
    {
        match self {
            Self::Cleared => String::new(),
            Self::Ready(value) => render(value),
            Self::Invalid(_) => INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}

impl FormOutcome<GeoReadout> {
    pub fn notation_text(&self, notation: GeoNotation) -> String {
        self.text(|readout| readout.get(notation).to_string())
    }
}

impl FormOutcome<String> {
    pub fn result_text(&self) -> String {
        self.text(String::clone)
    }
}

/// X/Z input fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameInput {
    pub x: String,
    pub z: String,
}

impl GameInput {
    pub fn new(x: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            z: z.into(),
        }
    }

    pub fn evaluate(&self, converter: &Converter) -> FormOutcome<GeoReadout> {
        if is_blank(&self.x) || is_blank(&self.z) {
            return FormOutcome::Cleared;
        }

        let parsed = parse_game_component(&self.x)
            .and_then(|x| parse_game_component(&self.z).map(|z| (x, z)));

        match parsed {
            Ok((x, z)) => FormOutcome::Ready(converter.game_to_geo(x, z)),
            Err(e) => FormOutcome::Invalid(e),
        }
    }
}

/// Latitude/longitude input fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoInput {
    pub lat: String,
    pub lng: String,
}

impl GeoInput {
    pub fn new(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    pub fn evaluate(&self, converter: &Converter) -> FormOutcome<String> {
        if is_blank(&self.lat) || is_blank(&self.lng) {
            return FormOutcome::Cleared;
        }

        match converter.geo_text_to_game(&self.lat, &self.lng) {
            Ok(result) => FormOutcome::Ready(result),
            Err(e) => FormOutcome::Invalid(e),
        }
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_game_input_clears() {
        let converter = Converter::new();

        for input in [
            GameInput::new("", "10"),
            GameInput::new("10", "  "),
            GameInput::default(),
        ] {
            let outcome = input.evaluate(&converter);
            assert_eq!(outcome, FormOutcome::Cleared);
            assert_eq!(outcome.notation_text(GeoNotation::Decimal), "");
            assert_eq!(outcome.tone(), FieldTone::Normal);
        }
    }

    #[test]
    fn test_invalid_game_input() {
        let outcome = GameInput::new("12a", "0").evaluate(&Converter::new());
        assert!(outcome.is_error());
        assert_eq!(outcome.tone(), FieldTone::Error);
        for notation in GeoNotation::ALL {
            assert_eq!(outcome.notation_text(notation), "Invalid input!");
        }
    }

    #[test]
    fn test_game_input_ready() {
        let outcome = GameInput::new(" 0 ", "0").evaluate(&Converter::new());
        assert_eq!(
            outcome.notation_text(GeoNotation::DecimalSuffixed),
            "0.00000 N, 0.00000 E"
        );
        assert_eq!(outcome.tone(), FieldTone::Normal);
    }

    #[test]
    fn test_geo_input() {
        let converter = Converter::new();

        assert_eq!(
            GeoInput::new("45.5", "").evaluate(&converter),
            FormOutcome::Cleared
        );

        let invalid = GeoInput::new("10°20'", "5").evaluate(&converter);
        assert_eq!(invalid, FormOutcome::Invalid(ParseError::SegmentCount(2)));
        assert_eq!(invalid.result_text(), "Invalid input!");

        let ready = GeoInput::new("45.5 N", "120.0 W").evaluate(&converter);
        assert_eq!(ready.result_text(), "X: -67582.66667, Z: -27954.69444");
    }

    #[test]
    fn test_geo_input_matches_converter() {
        let converter = Converter::with_scale(crate::WorldScale::new(3600.0, 1800.0));

        for (lat, lng) in [("12° 30' 0\" S", "45.25"), ("-10 S", "0.5 W"), ("1°2'", "3")] {
            let expected = match converter.geo_text_to_game(lat, lng) {
                Ok(text) => FormOutcome::Ready(text),
                Err(e) => FormOutcome::Invalid(e),
            };
            assert_eq!(GeoInput::new(lat, lng).evaluate(&converter), expected);
        }
    }

    #[test]
    fn test_latest_input_wins() {
        let converter = Converter::new();
        let mut input = GeoInput::new("abc", "0");
        assert!(input.evaluate(&converter).is_error());

        input.lat = "0".into();
        assert_eq!(
            input.evaluate(&converter).result_text(),
            "X: 0.00000, Z: 0.00000"
        );
    }
}
