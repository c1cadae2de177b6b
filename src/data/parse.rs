//! Text → decimal degree parsing
//!
//! Accepted forms, each optionally followed by a hemisphere letter
//! (`N`, `S`, `E` or `W`, uppercase):
//!
//! - decimal degrees: `45.5`, `-120`, `45.5 S`
//! - sexagesimal: `45° 30' 0.00"`, `45°30'15` (closing `"` is optional)
//!
//! A `S` or `W` suffix negates the value, including values that are already
//! negative.
//!
//! Numbers follow Rust's `f64` syntax: exponents, `inf` and `nan` are
//! accepted, type suffixes such as `1d` are not.

use crate::data::formats::Hemisphere;

const DMS_SEPARATORS: [char; 3] = ['°', '\'', '"'];

/// Errors produced while reading a coordinate from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Coordinate is empty")]
    Empty,
    #[error("Expected degrees, minutes and seconds, found {0} part(s)")]
    SegmentCount(usize),
    #[error("Not a number: {0:?}")]
    InvalidNumber(String),
}

/// Parses a latitude or longitude written in decimal or sexagesimal notation
pub fn parse_geographic_coordinate(text: &str) -> Result<f64, ParseError> {
    let result = parse_coordinate(text);

    #[cfg(feature = "debug")]
    {
        if let Err(e) = &result {
            log::debug!("Rejected coordinate {:?}: {}", text, e);
        }
    }

    result
}

/// Parses a plain game-unit number (no suffixes, no sexagesimal form)
pub fn parse_game_component(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    parse_number(trimmed)
}

fn parse_coordinate(text: &str) -> Result<f64, ParseError> {
    let mut body = text.trim();
    let last = body.chars().next_back().ok_or(ParseError::Empty)?;

    let hemisphere = Hemisphere::from_suffix(last);
    if hemisphere.is_some() {
        body = body[..body.len() - last.len_utf8()].trim_end();
    }

    if body.is_empty() {
        return Err(ParseError::Empty);
    }

    let value = if body.contains(DMS_SEPARATORS[0]) {
        parse_sexagesimal(body)?
    } else {
        parse_number(body)?
    };

    Ok(match hemisphere {
        Some(h) if h.is_negative() => -value,
        _ => value,
    })
}

fn parse_sexagesimal(body: &str) -> Result<f64, ParseError> {
    let mut parts: Vec<&str> = body.split(DMS_SEPARATORS).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }

    let &[degrees, minutes, seconds] = parts.as_slice() else {
        return Err(ParseError::SegmentCount(parts.len()));
    };

    let degrees = parse_number(degrees)?;
    let minutes = parse_number(minutes)?;
    let seconds = parse_number(seconds)?;

    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

fn parse_number(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_decimal() {
        assert_close(parse_geographic_coordinate("45.5").unwrap(), 45.5);
        assert_close(parse_geographic_coordinate("  -12.25 ").unwrap(), -12.25);
    }

    #[test]
    fn test_sexagesimal() {
        assert_close(parse_geographic_coordinate("45° 30' 0.00\"").unwrap(), 45.5);
        assert_close(parse_geographic_coordinate("10°15'36").unwrap(), 10.26);
    }

    #[test]
    fn test_suffixes() {
        assert_close(parse_geographic_coordinate("45.5 S").unwrap(), -45.5);
        assert_close(parse_geographic_coordinate("120.0 W").unwrap(), -120.0);
        assert_close(parse_geographic_coordinate("120.0E").unwrap(), 120.0);
        assert_close(parse_geographic_coordinate("33° 52' 7.68\" S").unwrap(), -33.8688);
    }

    #[test]
    fn test_negative_with_south_suffix_compounds() {
        assert_close(parse_geographic_coordinate("-10 S").unwrap(), 10.0);
    }

    #[test]
    fn test_lowercase_suffix_is_not_a_hemisphere() {
        assert!(matches!(
            parse_geographic_coordinate("45.5 s"),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            parse_geographic_coordinate("abc"),
            Err(ParseError::InvalidNumber(_))
        ));
        assert_eq!(
            parse_geographic_coordinate("10°20'"),
            Err(ParseError::SegmentCount(2))
        );
        assert_eq!(parse_geographic_coordinate(""), Err(ParseError::Empty));
        assert_eq!(parse_geographic_coordinate("   "), Err(ParseError::Empty));
        assert_eq!(parse_geographic_coordinate("N"), Err(ParseError::Empty));
        assert_eq!(
            parse_geographic_coordinate("1°2'3\"4\""),
            Err(ParseError::SegmentCount(4))
        );
        assert!(matches!(
            parse_geographic_coordinate("10°'5\""),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_number_syntax() {
        assert_eq!(parse_geographic_coordinate("1.5e1 N"), Ok(15.0));
        assert_eq!(parse_geographic_coordinate("inf W"), Ok(f64::NEG_INFINITY));
        assert!(parse_geographic_coordinate("nan").unwrap().is_nan());
        // A trailing N is read as a hemisphere, leaving "Na".
        assert!(parse_geographic_coordinate("NaN").is_err());
        assert_eq!(
            parse_geographic_coordinate("1d"),
            Err(ParseError::InvalidNumber("1d".to_string()))
        );
    }

    #[test]
    fn test_game_component() {
        assert_eq!(parse_game_component(" 101374 "), Ok(101_374.0));
        assert!(parse_game_component("12 N").is_err());
        assert_eq!(parse_game_component(""), Err(ParseError::Empty));
    }
}
