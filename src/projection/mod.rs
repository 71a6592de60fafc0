//! Coordinate reference systems, transformation caching and conversion

pub mod converter;
pub mod datum;
pub mod engine;
pub mod epsg;
pub mod registry;
pub mod transformer;

#[cfg(test)]
pub(crate) mod testing;

pub use converter::CoordinateConverter;
pub use datum::Datum;
pub use engine::{EngineError, EngineResult, ProjectionEngine};
pub use registry::{CrsHandle, CrsRegistry, RegistryStats, TransformHandle};
pub use transformer::{EpsgCrs, ProjEngine, Transformer};
