// This module defines the geometric types of the `geocollection_geometry` crate.
// It includes the primitives `Position` and `BBox`, the six GeoJSON geometry kinds, and the
// `RingGeometry` building block of polygons. Every geometry computes its bounding box once, at
// construction, and never changes its coordinates afterwards.

mod bbox;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod position;
mod ring;
mod traits;

pub use bbox::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use position::*;
pub use ring::*;
pub use traits::*;
