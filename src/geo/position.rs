use std::fmt;

use crate::geo::point::Point;
use crate::types::{EastWest, Hemisphere};
use crate::utm::zone::resolve_zone;

/// Geographic position in signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    latitude: f64,
    longitude: f64,
}

impl Position {
    /// Creates a position from latitude and longitude
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a position from a point whose x is longitude and y is latitude
    pub fn from_point(point: Point) -> Self {
        Self::new(point.y, point.x)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// True on or north of the equator
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.0
    }

    /// True west of the prime meridian
    pub fn is_west(&self) -> bool {
        self.longitude < 0.0
    }

    pub fn lat_dir(&self) -> Hemisphere {
        if self.is_north() {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    pub fn lon_dir(&self) -> EastWest {
        if self.is_west() {
            EastWest::West
        } else {
            EastWest::East
        }
    }

    /// Returns the UTM zone this position falls in
    pub fn utm_zone(&self) -> i32 {
        resolve_zone(self.latitude, self.longitude)
    }

    /// Returns the point form of this position (x = longitude, y = latitude)
    pub fn to_point(&self) -> Point {
        Point::from_lonlat(self.longitude, self.latitude)
    }
}

impl From<Point> for Position {
    fn from(point: Point) -> Self {
        Self::from_point(point)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat: {} Lon: {}", self.latitude, self.longitude)
    }
}
