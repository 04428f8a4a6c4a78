use super::{BBox, CompositeGeometryTrait, GeometryTrait, PolygonGeometry};
use crate::json::parse_array;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A collection of polygons, each of which may have an outer ring and holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry {
	polygons: Vec<PolygonGeometry>,
	bbox: BBox,
}

impl MultiPolygonGeometry {
	#[must_use]
	pub fn new(polygons: Vec<PolygonGeometry>) -> Self {
		let bbox = BBox::from_bboxes(polygons.iter().map(GeometryTrait::bbox));
		Self { polygons, bbox }
	}

	/// The bounding box of every ring, grouped per polygon.
	#[must_use]
	pub fn bboxes(&self) -> Vec<Vec<BBox>> {
		self.polygons.iter().map(PolygonGeometry::bboxes).collect()
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	type Geo = geo::MultiPolygon<f64>;

	/// Union over every ring of every polygon.
	fn bbox(&self) -> &BBox {
		&self.bbox
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.polygons.iter().map(GeometryTrait::to_coord_json).collect::<Vec<_>>())
	}

	fn from_coord_json(value: &Value) -> Result<Self> {
		parse_array(value, "multi polygon coordinates", PolygonGeometry::from_coord_json).map(Self::new)
	}

	fn to_geo(&self) -> geo::MultiPolygon<f64> {
		geo::MultiPolygon::new(self.polygons.iter().map(GeometryTrait::to_geo).collect())
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn as_slice(&self) -> &[PolygonGeometry] {
		&self.polygons
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.polygons
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.polygons).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);
