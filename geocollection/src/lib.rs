//! An in-memory GeoJSON feature collection.
//!
//! A [`FeatureCollection`] is read from GeoJSON, keeps every feature under a dense integer id in
//! source order, and offers projections of feature properties and lookups through an optional,
//! uniquely valued *id variable*. It serializes back to the same GeoJSON shape.
//!
//! The geometry model lives in the `geocollection_geometry` crate and is re-exported here.

mod collection;
mod error;
mod feature;
pub mod geojson;
mod options;
mod properties;
mod table;
mod value;

pub use collection::*;
pub use error::*;
pub use feature::GeoFeature;
pub use geocollection_geometry::*;
pub use geojson::*;
pub use options::*;
pub use properties::*;
pub use table::*;
pub use value::*;

/// File name used when a collection is saved without an explicit target.
pub const DEFAULT_OUTPUT_FILENAME: &str = "Untitled.geojson";
