//! Geographic bounding boxes

use crate::error::{Error, Result};
use crate::geo::position::Position;

/// Axis-aligned bounding box of geographic positions
///
/// East and West are taken as given; an extent crossing the antimeridian is
/// the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    north_east: Position,
    south_west: Position,
    center: Position,
}

impl Extent {
    /// Creates an extent from its corners, computing the great-circle midpoint
    ///
    /// `north_east` must not lie south of `south_west`; this is checked in
    /// debug builds only. Longitudes are not ordered.
    pub fn new(north_east: Position, south_west: Position) -> Self {
        debug_assert!(
            north_east.latitude() >= south_west.latitude(),
            "north-east corner {} lies south of south-west corner {}",
            north_east,
            south_west
        );

        Self {
            north_east,
            south_west,
            center: geo_midpoint(&north_east, &south_west),
        }
    }

    /// Creates an extent from its four bounds in degrees
    pub fn from_bounds(north: f64, east: f64, south: f64, west: f64) -> Self {
        Self::new(Position::new(north, east), Position::new(south, west))
    }

    /// Starts an empty builder
    pub fn builder() -> ExtentBuilder {
        ExtentBuilder::new()
    }

    pub fn north_east(&self) -> Position {
        self.north_east
    }

    pub fn south_west(&self) -> Position {
        self.south_west
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn north(&self) -> f64 {
        self.north_east.latitude()
    }

    pub fn south(&self) -> f64 {
        self.south_west.latitude()
    }

    pub fn east(&self) -> f64 {
        self.north_east.longitude()
    }

    pub fn west(&self) -> f64 {
        self.south_west.longitude()
    }

    /// Check if this extent contains a position (bounds inclusive)
    pub fn contains(&self, position: &Position) -> bool {
        position.latitude() >= self.south()
            && position.latitude() <= self.north()
            && position.longitude() >= self.west()
            && position.longitude() <= self.east()
    }
}

/// Great-circle midpoint of two positions on a sphere
pub fn geo_midpoint(a: &Position, b: &Position) -> Position {
    let lat1 = a.latitude().to_radians();
    let lon1 = a.longitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();

    let lat = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lon = lon1 + by.atan2(lat1.cos() + bx);

    Position::new(lat.to_degrees(), (lon.to_degrees() + 540.0).rem_euclid(360.0) - 180.0)
}

/// Incrementally collects positions into an [`Extent`]
///
/// Single owner; not meant to be shared across threads while accumulating.
#[derive(Debug, Clone, Default)]
pub struct ExtentBuilder {
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl ExtentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once anything has been included
    pub fn has_positions(&self) -> bool {
        !self.lats.is_empty()
    }

    pub fn include_lat_lon(&mut self, latitude: f64, longitude: f64) -> &mut Self {
        self.lats.push(latitude);
        self.lons.push(longitude);
        self
    }

    pub fn include_position(&mut self, position: &Position) -> &mut Self {
        self.include_lat_lon(position.latitude(), position.longitude())
    }

    pub fn include_positions<'a>(&mut self, positions: impl IntoIterator<Item = &'a Position>) -> &mut Self {
        for position in positions {
            self.include_position(position);
        }
        self
    }

    /// Includes both corners of another extent
    pub fn include_extent(&mut self, extent: &Extent) -> &mut Self {
        self.include_position(&extent.north_east);
        self.include_position(&extent.south_west)
    }

    /// Builds the extent spanning every included sample
    ///
    /// Does not consume the samples; building twice gives the same extent.
    ///
    /// # Errors
    /// `EmptyInput` if nothing was included.
    pub fn build(&self) -> Result<Extent> {
        let (south, north) = min_max(&self.lats).ok_or(Error::EmptyInput)?;
        let (west, east) = min_max(&self.lons).ok_or(Error::EmptyInput)?;

        Ok(Extent::from_bounds(north, east, south, west))
    }
}

/// First sample seeds both bounds
fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(min, max), &v| {
        (if v < min { v } else { min }, if v > max { v } else { max })
    }))
}
