//! Reading and writing GeoJSON feature collections.
//!
//! JSON text is handled by `serde_json`; this module only maps between its generic
//! [`serde_json::Value`] and [`crate::FeatureCollection`].

mod read;
mod write;

pub use read::*;
pub use write::*;
