//! Geographic positions and extents

pub mod extent;
pub mod point;
pub mod position;

pub use extent::{geo_midpoint, Extent, ExtentBuilder};
pub use point::Point;
pub use position::Position;
