//! Conversions between geographic positions and UTM coordinates

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::error::Result;
use crate::geo::position::Position;
use crate::projection::datum::Datum;
use crate::projection::engine::ProjectionEngine;
use crate::projection::registry::CrsRegistry;
use crate::projection::transformer::ProjEngine;
use crate::types::Hemisphere;
use crate::utm::coords::UtmCoords;
use crate::utm::zone::resolve_zone;

/// Converts coordinates through a shared [`CrsRegistry`]
///
/// Cloning is cheap and clones share the registry, so one converter can be
/// handed to many threads.
pub struct CoordinateConverter<E: ProjectionEngine> {
    registry: Arc<CrsRegistry<E>>,
}

impl<E: ProjectionEngine> CoordinateConverter<E> {
    /// Creates a converter with its own registry over `engine`
    pub fn new(engine: E) -> Self {
        Self::with_registry(Arc::new(CrsRegistry::new(engine)))
    }

    /// Creates a converter over an existing registry
    pub fn with_registry(registry: Arc<CrsRegistry<E>>) -> Self {
        Self { registry }
    }

    /// Returns the registry backing this converter
    pub fn registry(&self) -> &Arc<CrsRegistry<E>> {
        &self.registry
    }

    /// Converts a position to WGS84 UTM in the zone it falls in
    pub fn to_utm(&self, position: &Position) -> Result<UtmCoords> {
        self.to_utm_in(position, Datum::WGS84, 0)
    }

    /// Converts a position to UTM on `datum`
    ///
    /// A `target_zone` in 1..=60 is used as is; anything else means the zone
    /// is resolved from the position. The hemisphere follows the latitude.
    ///
    /// The result is always tagged `WGS84`, whatever `datum` selected the
    /// projection. The numbers are not reprojected between datums.
    pub fn to_utm_in(&self, position: &Position, datum: Datum, target_zone: i32) -> Result<UtmCoords> {
        let zone = if (1..=60).contains(&target_zone) {
            target_zone
        } else {
            resolve_zone(position.latitude(), position.longitude())
        };

        let from = self.registry.geographic_crs()?;
        let to = self.registry.get_crs(datum, zone, position.lat_dir())?;
        let transform = self.registry.get_transform(&from, &to)?;

        let ordinates = self.registry.apply(&transform, [position.latitude(), position.longitude()])?;

        if datum != Datum::WGS84 {
            debug!("{} projection output for zone {} tagged as WGS84", datum, zone);
        }

        UtmCoords::from_ordinates(&ordinates, Datum::WGS84, zone)
    }

    /// Converts UTM coordinates to a position, assuming the northern hemisphere
    pub fn to_geographic(&self, coords: &UtmCoords) -> Result<Position> {
        self.to_geographic_in(coords, Hemisphere::North)
    }

    /// Converts UTM coordinates in `hemisphere` to a WGS84 position
    pub fn to_geographic_in(&self, coords: &UtmCoords, hemisphere: Hemisphere) -> Result<Position> {
        let from = self.registry.get_crs(coords.datum(), coords.zone(), hemisphere)?;
        let to = self.registry.geographic_crs()?;
        let transform = self.registry.get_transform(&from, &to)?;

        let [latitude, longitude] = self.registry.apply(&transform, [coords.x(), coords.y()])?;

        Ok(Position::new(latitude, longitude))
    }

    /// Reprojects UTM coordinates onto another datum and zone
    ///
    /// Both ends are taken as northern hemisphere projections.
    pub fn reproject(&self, coords: &UtmCoords, datum: Datum, zone: i32) -> Result<UtmCoords> {
        let from = self.registry.get_crs(coords.datum(), coords.zone(), Hemisphere::North)?;
        let to = self.registry.get_crs(datum, zone, Hemisphere::North)?;
        let transform = self.registry.get_transform(&from, &to)?;

        let ordinates = self.registry.apply(&transform, [coords.x(), coords.y()])?;

        UtmCoords::from_ordinates(&ordinates, datum, zone)
    }

    /// Converts many positions in parallel, see [`Self::to_utm_in`]
    pub fn to_utm_many(&self, positions: &[Position], datum: Datum, target_zone: i32) -> Result<Vec<UtmCoords>> {
        positions
            .par_iter()
            .map(|position| self.to_utm_in(position, datum, target_zone))
            .collect()
    }

    /// Converts many UTM coordinates in parallel, see [`Self::to_geographic_in`]
    pub fn to_geographic_many(&self, coords: &[UtmCoords], hemisphere: Hemisphere) -> Result<Vec<Position>> {
        coords
            .par_iter()
            .map(|c| self.to_geographic_in(c, hemisphere))
            .collect()
    }
}

impl<E: ProjectionEngine> Clone for CoordinateConverter<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl Default for CoordinateConverter<ProjEngine> {
    fn default() -> Self {
        Self::new(ProjEngine::new())
    }
}
