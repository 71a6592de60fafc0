//! Seam between the registry and the library doing the geodetic math

use thiserror::Error;

/// Result type for projection backend calls
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Failures reported by a projection backend
#[derive(Error, Debug)]
pub enum EngineError {
    /// The backend has no definition for an EPSG code
    #[error("Unknown EPSG code: {0}")]
    UnknownEpsgCode(u32),

    /// Any other backend failure
    #[error("{0}")]
    Backend(String),
}

/// Backend able to build coordinate reference systems and transforms between them
///
/// Ordinates follow EPSG authority axis order: geographic systems take and
/// return `[latitude, longitude]`, UTM systems `[easting, northing]`.
pub trait ProjectionEngine: Send + Sync {
    /// Coordinate reference system handle
    type Crs: Send + Sync;

    /// Transformation pipeline handle
    type Transform: Send + Sync;

    /// Creates the coordinate reference system for an EPSG code
    fn create_crs(&self, epsg: u32) -> EngineResult<Self::Crs>;

    /// Creates a transformation pipeline from one system to another
    fn create_transform(&self, from: &Self::Crs, to: &Self::Crs) -> EngineResult<Self::Transform>;

    /// Applies a transformation to a pair of ordinates
    fn apply(&self, transform: &Self::Transform, ordinates: [f64; 2]) -> EngineResult<[f64; 2]>;
}
