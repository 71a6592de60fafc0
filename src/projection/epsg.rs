//! EPSG codes for the coordinate reference systems used by geozone

use crate::error::{Error, Result};
use crate::projection::datum::Datum;
use crate::types::Hemisphere;

/// WGS84 geographic latitude/longitude
pub const WGS84: u32 = 4326;

/// First WGS84 UTM north zone code, offset by zone number
pub const WGS84_UTM_NORTH_BASE: u32 = 32600;

/// First WGS84 UTM south zone code, offset by zone number
pub const WGS84_UTM_SOUTH_BASE: u32 = 32700;

/// First NAD83 UTM zone code, offset by zone number
pub const NAD83_UTM_BASE: u32 = 26900;

/// Highest WGS84 UTM zone
pub const WGS84_MAX_ZONE: i32 = 60;

/// Highest NAD83 UTM zone
pub const NAD83_MAX_ZONE: i32 = 23;

/// Returns the EPSG code of the UTM projection for a datum, zone and hemisphere
///
/// NAD83 has no southern variant, so `hemisphere` is ignored for it.
pub fn utm_code(datum: Datum, zone: i32, hemisphere: Hemisphere) -> Result<u32> {
    match datum {
        Datum::WGS84 => {
            let zone = checked_zone(datum, zone, WGS84_MAX_ZONE)?;
            Ok(match hemisphere {
                Hemisphere::North => WGS84_UTM_NORTH_BASE + zone,
                Hemisphere::South => WGS84_UTM_SOUTH_BASE + zone,
            })
        }
        Datum::NAD83 => Ok(NAD83_UTM_BASE + checked_zone(datum, zone, NAD83_MAX_ZONE)?),
        Datum::NSRS => Err(Error::UnsupportedDatum(datum)),
    }
}

/// Returns true if the code names a geographic (latitude/longitude) CRS
pub fn is_geographic(code: u32) -> bool {
    (4000..5000).contains(&code)
}

fn checked_zone(datum: Datum, zone: i32, max_zone: i32) -> Result<u32> {
    if (1..=max_zone).contains(&zone) {
        Ok(zone as u32)
    } else {
        Err(Error::InvalidZone { datum, zone })
    }
}
