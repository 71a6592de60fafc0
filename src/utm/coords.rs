use std::fmt;

use crate::error::{Error, Result};
use crate::geo::point::Point;
use crate::projection::datum::Datum;

/// Planar UTM coordinate tagged with its datum and zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoords {
    x: f64,
    y: f64,
    datum: Datum,
    zone: i32,
}

impl UtmCoords {
    /// Creates a coordinate from easting and northing
    pub fn new(x: f64, y: f64, datum: Datum, zone: i32) -> Self {
        Self { x, y, datum, zone }
    }

    /// Creates a coordinate from an `[easting, northing, ..]` ordinate slice
    ///
    /// # Errors
    /// `InvalidOrdinateCount` if fewer than two ordinates are given.
    pub fn from_ordinates(ordinates: &[f64], datum: Datum, zone: i32) -> Result<Self> {
        match ordinates {
            [x, y, ..] => Ok(Self::new(*x, *y, datum, zone)),
            _ => Err(Error::InvalidOrdinateCount(ordinates.len())),
        }
    }

    /// Easting in meters
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Northing in meters
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn datum(&self) -> Datum {
        self.datum
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for UtmCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {} Y: {} Zone: {} Datum: {}", self.x, self.y, self.zone, self.datum)
    }
}
