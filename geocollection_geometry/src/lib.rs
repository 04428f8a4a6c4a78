//! Typed GeoJSON geometries.
//!
//! Every geometry kind of the GeoJSON model (except `GeometryCollection`) is represented by its own
//! struct holding an immutable coordinate payload and a bounding box that is computed once, when the
//! geometry is constructed. The closed [`Geometry`] enum ties the six kinds together and acts as the
//! factory that turns a type tag plus a coordinate payload into a typed geometry.

mod error;
mod geometry;
mod geometry_type;
mod json;
mod types;

pub use error::*;
pub use geometry::*;
pub use geometry_type::*;
pub use types::*;
