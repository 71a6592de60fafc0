//! UTM bounding boxes confined to a single zone and datum

use crate::error::{Error, Result};
use crate::geo::point::Point;
use crate::projection::datum::Datum;
use crate::utm::coords::UtmCoords;

/// Axis-aligned bounding box of UTM coordinates sharing one zone and datum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmExtent {
    north_east: UtmCoords,
    south_west: UtmCoords,
    zone: i32,
    datum: Datum,
}

impl UtmExtent {
    /// Creates an extent from its corners
    ///
    /// # Errors
    /// `MismatchedZone` or `MismatchedDatum` if the corners disagree.
    pub fn new(north_east: UtmCoords, south_west: UtmCoords) -> Result<Self> {
        if north_east.zone() != south_west.zone() {
            return Err(Error::MismatchedZone {
                expected: north_east.zone(),
                found: south_west.zone(),
            });
        }

        if north_east.datum() != south_west.datum() {
            return Err(Error::MismatchedDatum {
                expected: north_east.datum(),
                found: south_west.datum(),
            });
        }

        Ok(Self {
            north_east,
            south_west,
            zone: north_east.zone(),
            datum: north_east.datum(),
        })
    }

    /// Creates an extent from its four bounds in meters
    pub fn from_bounds(north: f64, east: f64, south: f64, west: f64, zone: i32, datum: Datum) -> Self {
        Self {
            north_east: UtmCoords::new(east, north, datum, zone),
            south_west: UtmCoords::new(west, south, datum, zone),
            zone,
            datum,
        }
    }

    /// Starts an empty builder for a zone and datum
    pub fn builder(zone: i32, datum: Datum) -> UtmExtentBuilder {
        UtmExtentBuilder::new(zone, datum)
    }

    pub fn north_east(&self) -> UtmCoords {
        self.north_east
    }

    pub fn south_west(&self) -> UtmCoords {
        self.south_west
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }

    pub fn datum(&self) -> Datum {
        self.datum
    }

    pub fn north(&self) -> f64 {
        self.north_east.y()
    }

    pub fn south(&self) -> f64 {
        self.south_west.y()
    }

    pub fn east(&self) -> f64 {
        self.north_east.x()
    }

    pub fn west(&self) -> f64 {
        self.south_west.x()
    }

    pub fn width(&self) -> f64 {
        self.east() - self.west()
    }

    pub fn height(&self) -> f64 {
        self.north() - self.south()
    }

    /// Check if this extent contains a coordinate of the same zone and datum
    pub fn contains(&self, coords: &UtmCoords) -> bool {
        coords.zone() == self.zone
            && coords.datum() == self.datum
            && coords.x() >= self.west()
            && coords.x() <= self.east()
            && coords.y() >= self.south()
            && coords.y() <= self.north()
    }
}

/// Incrementally collects UTM samples of one zone and datum into a [`UtmExtent`]
///
/// Tagged inputs are checked on every include; raw points and x/y pairs are
/// assumed to be in the builder's zone. Single owner, not thread-safe.
#[derive(Debug, Clone)]
pub struct UtmExtentBuilder {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zone: i32,
    datum: Datum,
}

impl UtmExtentBuilder {
    pub fn new(zone: i32, datum: Datum) -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
            zone,
            datum,
        }
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }

    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Returns true once anything has been included
    pub fn has_positions(&self) -> bool {
        !self.xs.is_empty()
    }

    pub fn include_xy(&mut self, x: f64, y: f64) -> &mut Self {
        self.xs.push(x);
        self.ys.push(y);
        self
    }

    pub fn include_point(&mut self, point: &Point) -> &mut Self {
        self.include_xy(point.x, point.y)
    }

    pub fn include_points<'a>(&mut self, points: impl IntoIterator<Item = &'a Point>) -> &mut Self {
        for point in points {
            self.include_point(point);
        }
        self
    }

    /// Includes a coordinate after checking its zone and datum
    pub fn include_coords(&mut self, coords: &UtmCoords) -> Result<&mut Self> {
        self.check(coords)?;
        Ok(self.include_xy(coords.x(), coords.y()))
    }

    /// Includes coordinates in order, stopping at the first mismatch
    ///
    /// Coordinates before the mismatch stay included.
    pub fn include_all_coords<'a>(
        &mut self,
        coords: impl IntoIterator<Item = &'a UtmCoords>,
    ) -> Result<&mut Self> {
        for c in coords {
            self.include_coords(c)?;
        }
        Ok(self)
    }

    /// Includes both corners of another extent after checking them
    pub fn include_extent(&mut self, extent: &UtmExtent) -> Result<&mut Self> {
        self.check(&extent.north_east)?;
        self.check(&extent.south_west)?;

        self.xs.push(extent.east());
        self.xs.push(extent.west());
        self.ys.push(extent.north());
        self.ys.push(extent.south());
        Ok(self)
    }

    /// Includes extents in order, stopping at the first mismatch
    pub fn include_extents<'a>(
        &mut self,
        extents: impl IntoIterator<Item = &'a UtmExtent>,
    ) -> Result<&mut Self> {
        for extent in extents {
            self.include_extent(extent)?;
        }
        Ok(self)
    }

    /// Builds the extent spanning every included sample
    ///
    /// # Errors
    /// `EmptyInput` if nothing was included.
    pub fn build(&self) -> Result<UtmExtent> {
        if self.xs.is_empty() {
            return Err(Error::EmptyInput);
        }

        let (west, east) = bounds(&self.xs);
        let (south, north) = bounds(&self.ys);

        Ok(UtmExtent::from_bounds(north, east, south, west, self.zone, self.datum))
    }

    fn check(&self, coords: &UtmCoords) -> Result<()> {
        if coords.zone() != self.zone {
            return Err(Error::MismatchedZone { expected: self.zone, found: coords.zone() });
        }

        if coords.datum() != self.datum {
            return Err(Error::MismatchedDatum { expected: self.datum, found: coords.datum() });
        }

        Ok(())
    }
}

/// Bounds start at +/- infinity and tighten over every sample
fn bounds(values: &[f64]) -> (f64, f64) {
    values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
        (min.min(v), max.max(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_matching_corners() {
        let extent = UtmExtent::new(
            UtmCoords::new(500000.0, 45.0, Datum::WGS84, 12),
            UtmCoords::new(400000.0, 40.0, Datum::WGS84, 12),
        )
        .unwrap();

        assert_eq!(extent.north(), 45.0);
        assert_eq!(extent.south(), 40.0);
        assert_eq!(extent.east(), 500000.0);
        assert_eq!(extent.west(), 400000.0);
        assert_eq!(extent.zone(), 12);
        assert_eq!(extent.datum(), Datum::WGS84);
    }

    #[test]
    fn test_new_mismatched_corners() {
        let ne = UtmCoords::new(500000.0, 45.0, Datum::WGS84, 12);

        assert!(matches!(
            UtmExtent::new(ne, UtmCoords::new(400000.0, 40.0, Datum::WGS84, 13)),
            Err(Error::MismatchedZone { expected: 12, found: 13 })
        ));
        assert!(matches!(
            UtmExtent::new(ne, UtmCoords::new(400000.0, 40.0, Datum::NAD83, 12)),
            Err(Error::MismatchedDatum { expected: Datum::WGS84, found: Datum::NAD83 })
        ));
    }

    #[test]
    fn test_builder_rejects_zone_immediately() {
        let mut builder = UtmExtentBuilder::new(12, Datum::WGS84);

        let result = builder.include_coords(&UtmCoords::new(1.0, 2.0, Datum::WGS84, 13));
        assert!(matches!(result, Err(Error::MismatchedZone { expected: 12, found: 13 })));
        assert!(!builder.has_positions());
    }

    #[test]
    fn test_builder_rejects_datum() {
        let mut builder = UtmExtent::builder(12, Datum::WGS84);

        let result = builder.include_coords(&UtmCoords::new(1.0, 2.0, Datum::NAD83, 12));
        assert!(matches!(result, Err(Error::MismatchedDatum { .. })));
    }

    #[test]
    fn test_builder_rejects_extent_with_foreign_datum() {
        let mut builder = UtmExtentBuilder::new(12, Datum::NAD83);
        let extent = UtmExtent::from_bounds(10.0, 10.0, 0.0, 0.0, 12, Datum::WGS84);

        assert!(matches!(
            builder.include_extent(&extent),
            Err(Error::MismatchedDatum { expected: Datum::NAD83, found: Datum::WGS84 })
        ));
    }

    #[test]
    fn test_builder_empty() {
        let builder = UtmExtentBuilder::new(12, Datum::WGS84);
        assert!(matches!(builder.build(), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_builder_single_sample() {
        let mut builder = UtmExtentBuilder::new(10, Datum::WGS84);
        builder.include_coords(&UtmCoords::new(550000.0, 5270000.0, Datum::WGS84, 10)).unwrap();

        let extent = builder.build().unwrap();
        assert_eq!(extent.north_east(), extent.south_west());
        assert_eq!(extent.north_east(), UtmCoords::new(550000.0, 5270000.0, Datum::WGS84, 10));
    }

    #[test]
    fn test_builder_mixed_sources() {
        let mut builder = UtmExtentBuilder::new(10, Datum::WGS84);
        builder
            .include_xy(500000.0, 5000000.0)
            .include_points(&[Point::new(480000.0, 5010000.0), Point::new(505000.0, 4990000.0)]);
        builder
            .include_extent(&UtmExtent::from_bounds(5020000.0, 510000.0, 5005000.0, 495000.0, 10, Datum::WGS84))
            .unwrap();

        let extent = builder.build().unwrap();
        assert_eq!(extent.north(), 5020000.0);
        assert_eq!(extent.south(), 4990000.0);
        assert_eq!(extent.east(), 510000.0);
        assert_eq!(extent.west(), 480000.0);
        assert_eq!(extent.width(), 30000.0);
        assert_eq!(extent.height(), 30000.0);
    }

    #[test]
    fn test_builder_bulk_include_stops_at_mismatch() {
        let mut builder = UtmExtentBuilder::new(10, Datum::WGS84);
        let coords = [
            UtmCoords::new(1.0, 1.0, Datum::WGS84, 10),
            UtmCoords::new(2.0, 2.0, Datum::WGS84, 11),
            UtmCoords::new(3.0, 3.0, Datum::WGS84, 10),
        ];

        assert!(builder.include_all_coords(&coords).is_err());

        let extent = builder.build().unwrap();
        assert_eq!(extent.east(), 1.0);
        assert_eq!(extent.west(), 1.0);
    }

    #[test]
    fn test_build_is_repeatable() {
        let mut builder = UtmExtentBuilder::new(10, Datum::WGS84);
        builder.include_xy(1.0, 2.0).include_xy(3.0, 4.0);
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }

    #[test]
    fn test_contains() {
        let extent = UtmExtent::from_bounds(100.0, 100.0, 0.0, 0.0, 10, Datum::WGS84);
        assert!(extent.contains(&UtmCoords::new(50.0, 50.0, Datum::WGS84, 10)));
        assert!(!extent.contains(&UtmCoords::new(50.0, 50.0, Datum::WGS84, 11)));
        assert!(!extent.contains(&UtmCoords::new(150.0, 50.0, Datum::WGS84, 10)));
    }
}
