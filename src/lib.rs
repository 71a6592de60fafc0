//! geozone - Geographic and UTM coordinates for Rust
//!
//! geozone provides latitude/longitude and UTM coordinate types, bounding
//! boxes over both, UTM zone resolution and cached conversions between
//! geographic and UTM coordinates on the WGS84 and NAD83 datums.
//!
//! # Examples
//!
//! ## Converting a position
//!
//! ```no_run
//! use geozone::{CoordinateConverter, Position, ProjEngine};
//!
//! let converter = CoordinateConverter::new(ProjEngine::new());
//! let utm = converter.to_utm(&Position::new(47.6062, -122.3321))?;
//! println!("{}", utm);
//!
//! let back = converter.to_geographic(&utm)?;
//! println!("{}", back);
//! # Ok::<(), geozone::Error>(())
//! ```
//!
//! ## Building an extent
//!
//! ```
//! use geozone::{Datum, UtmCoords, UtmExtent};
//!
//! let mut builder = UtmExtent::builder(10, Datum::WGS84);
//! builder.include_coords(&UtmCoords::new(550000.0, 5270000.0, Datum::WGS84, 10))?;
//! builder.include_xy(560000.0, 5280000.0);
//!
//! let extent = builder.build()?;
//! assert_eq!(extent.east(), 560000.0);
//! # Ok::<(), geozone::Error>(())
//! ```

pub mod error;
pub mod geo;
pub mod projection;
pub mod types;
pub mod utm;

pub use error::{Error, Result};
pub use geo::{Extent, ExtentBuilder, Point, Position};
pub use projection::{
    epsg, CoordinateConverter, CrsHandle, CrsRegistry, Datum, EngineError, ProjEngine,
    ProjectionEngine, TransformHandle,
};
pub use types::{EastWest, Hemisphere};
pub use utm::{resolve_zone, UtmCoords, UtmExtent, UtmExtentBuilder};
