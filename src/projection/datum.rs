use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Geodetic datums a UTM coordinate can be referenced to
///
/// Numeric codes are NAD83 = 0, WGS84 = 1, NSRS = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Datum {
    NAD83,
    #[default]
    WGS84,
    NSRS,
}

impl Datum {
    /// Returns the numeric code of this datum
    pub fn code(&self) -> u8 {
        match self {
            Datum::NAD83 => 0,
            Datum::WGS84 => 1,
            Datum::NSRS => 2,
        }
    }

    /// Creates a datum from its numeric code
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Datum::NAD83),
            1 => Ok(Datum::WGS84),
            2 => Ok(Datum::NSRS),
            _ => Err(Error::Parse { kind: "datum", value: code.to_string() }),
        }
    }

    /// Returns the canonical name of this datum
    pub fn name(&self) -> &'static str {
        match self {
            Datum::NAD83 => "NAD83",
            Datum::WGS84 => "WGS84",
            Datum::NSRS => "NSRS",
        }
    }
}

impl FromStr for Datum {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "0" | "nad83" => Ok(Datum::NAD83),
            "1" | "wgs84" => Ok(Datum::WGS84),
            "2" | "nsrs" => Ok(Datum::NSRS),
            _ => Err(Error::Parse { kind: "datum", value: value.to_string() }),
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
