//! UTM coordinates, extents and zone numbers

pub mod coords;
pub mod extent;
pub mod zone;

pub use coords::UtmCoords;
pub use extent::{UtmExtent, UtmExtentBuilder};
pub use zone::{normalize_longitude, resolve_zone};
