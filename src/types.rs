//! Directional types for geographic coordinates

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// North/South designation of a latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

impl Hemisphere {
    /// Returns the hemisphere a latitude lies in (the equator counts as North)
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    /// Returns the numeric code (North = 0, South = 1)
    pub fn code(&self) -> u8 {
        match self {
            Hemisphere::North => 0,
            Hemisphere::South => 1,
        }
    }

    /// Returns the single letter abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
        }
    }
}

impl FromStr for Hemisphere {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        parse_with_fallback(value, "hemisphere", |token| match token.to_lowercase().as_str() {
            "0" | "n" | "north" => Some(Hemisphere::North),
            "1" | "s" | "south" => Some(Hemisphere::South),
            _ => None,
        })
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hemisphere::North => write!(f, "North"),
            Hemisphere::South => write!(f, "South"),
        }
    }
}

/// East/West designation of a longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EastWest {
    East,
    West,
}

impl EastWest {
    /// Returns the side of the prime meridian a longitude lies on (0 counts as East)
    pub fn from_longitude(longitude: f64) -> Self {
        if longitude >= 0.0 {
            EastWest::East
        } else {
            EastWest::West
        }
    }

    /// Returns the numeric code (East = 0, West = 1)
    pub fn code(&self) -> u8 {
        match self {
            EastWest::East => 0,
            EastWest::West => 1,
        }
    }

    /// Returns the single letter abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            EastWest::East => "E",
            EastWest::West => "W",
        }
    }
}

impl FromStr for EastWest {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        parse_with_fallback(value, "east/west", |token| match token.to_lowercase().as_str() {
            "0" | "e" | "east" => Some(EastWest::East),
            "1" | "w" | "west" => Some(EastWest::West),
            _ => None,
        })
    }
}

impl fmt::Display for EastWest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EastWest::East => write!(f, "East"),
            EastWest::West => write!(f, "West"),
        }
    }
}

/// Matches the whole value first, then retries with the first space separated
/// token when the value holds more than one.
fn parse_with_fallback<T>(
    value: &str,
    kind: &'static str,
    lookup: impl Fn(&str) -> Option<T>,
) -> Result<T> {
    if let Some(parsed) = lookup(value) {
        return Ok(parsed);
    }

    let tokens: Vec<&str> = value.split(' ').collect();
    if tokens.len() > 1 {
        return parse_with_fallback(tokens[0], kind, lookup);
    }

    Err(Error::Parse { kind, value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_from_latitude() {
        assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::North);
        assert_eq!(Hemisphere::from_latitude(45.0), Hemisphere::North);
        assert_eq!(Hemisphere::from_latitude(-0.5), Hemisphere::South);
    }

    #[test]
    fn test_east_west_from_longitude() {
        assert_eq!(EastWest::from_longitude(0.0), EastWest::East);
        assert_eq!(EastWest::from_longitude(-122.0), EastWest::West);
    }

    #[test]
    fn test_parse_spellings() {
        assert_eq!("E".parse::<EastWest>().unwrap(), EastWest::East);
        assert_eq!("west".parse::<EastWest>().unwrap(), EastWest::West);
        assert_eq!("1".parse::<EastWest>().unwrap(), EastWest::West);
        assert_eq!("NORTH".parse::<Hemisphere>().unwrap(), Hemisphere::North);
        assert_eq!("s".parse::<Hemisphere>().unwrap(), Hemisphere::South);
        assert_eq!("0".parse::<Hemisphere>().unwrap(), Hemisphere::North);
    }

    #[test]
    fn test_parse_first_token_fallback() {
        assert_eq!("W 122".parse::<EastWest>().unwrap(), EastWest::West);
        assert_eq!("South of here".parse::<Hemisphere>().unwrap(), Hemisphere::South);
    }

    #[test]
    fn test_parse_unknown() {
        assert!("up".parse::<EastWest>().is_err());
        assert!("x y".parse::<Hemisphere>().is_err());
        assert!("".parse::<Hemisphere>().is_err());
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(EastWest::East.abbreviation(), "E");
        assert_eq!(EastWest::West.abbreviation(), "W");
        assert_eq!(Hemisphere::South.abbreviation(), "S");
        assert_eq!(Hemisphere::default(), Hemisphere::North);
    }
}
