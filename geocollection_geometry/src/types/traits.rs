use super::BBox;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Defines the interface shared by all geometric primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// The matching type of the `geo` crate.
	type Geo;

	/// Returns the bounding box that was computed when the geometry was constructed.
	fn bbox(&self) -> &BBox;

	/// Converts the geometry into the JSON representation of its coordinates,
	/// i.e. the value of a GeoJSON `coordinates` member.
	fn to_coord_json(&self) -> Value;

	/// Builds the geometry from the value of a GeoJSON `coordinates` member.
	/// Returns an error if the nesting or the positions do not fit this geometry.
	fn from_coord_json(value: &Value) -> Result<Self>;

	/// Converts the geometry into its `geo` counterpart, keeping `x` and `y` of every position.
	fn to_geo(&self) -> Self::Geo;
}

/// Read access to geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Returns the inner elements.
	fn as_slice(&self) -> &[Item];

	/// Consumes the composite geometry and returns the inner elements.
	fn into_inner(self) -> Vec<Item>;

	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_slice().iter()
	}

	fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	fn len(&self) -> usize {
		self.as_slice().len()
	}

	fn first(&self) -> Option<&Item> {
		self.as_slice().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_slice().last()
	}
}
